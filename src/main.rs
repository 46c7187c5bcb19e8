//! TRL Ride Booking & Fleet Dispatch Backend
//!
//! REST backend for a ground-transport company: public ride booking and
//! tracking, a CEO admin area, and a driver area. All state is held in
//! memory, seeded at startup.

mod analytics;
mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use models::Role;
use store::{seed, BookingStore, DriverStore, IdentityStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingStore>,
    pub drivers: Arc<DriverStore>,
    pub identity: Arc<IdentityStore>,
}

impl AppState {
    /// Build application state with the stock seed data.
    pub fn seeded(config: &Config) -> Self {
        Self {
            bookings: Arc::new(BookingStore::new(seed::bookings())),
            drivers: Arc::new(DriverStore::new(seed::drivers())),
            identity: Arc::new(IdentityStore::new(seed::users(), config.session_ttl)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TRL Booking Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Session TTL: {:?}", config.session_ttl);

    let state = AppState::seeded(&config);
    tracing::info!(
        "Seeded {} bookings, {} drivers",
        state.bookings.list(None).len(),
        state.drivers.list().len()
    );

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let identity = state.identity.clone();

    // Public routes: booking form, tracking, catalog, login
    let public_routes = Router::new()
        .route("/services", get(api::list_services))
        .route("/bookings", post(api::create_booking))
        .route("/track/{ticket_id}", get(api::track_ride))
        .route("/auth/login", post(api::login));

    // Session routes available to any authenticated role
    let session_identity = identity.clone();
    let session_routes = Router::new()
        .route("/auth/logout", post(api::logout))
        .route("/auth/me", get(api::me))
        .route("/auth/password", put(api::change_password))
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(session_identity.clone(), None, req, next)
        }));

    // CEO admin area
    let ceo_identity = identity.clone();
    let admin_routes = Router::new()
        .route("/bookings", get(api::list_bookings))
        .route("/bookings/{id}", get(api::get_booking))
        .route("/bookings/{id}/status", put(api::update_booking_status))
        .route("/bookings/{id}/driver", put(api::assign_driver))
        .route("/drivers", get(api::list_drivers))
        .route("/drivers/{id}", get(api::get_driver))
        .route("/dashboard", get(api::dashboard))
        .route("/analytics", get(api::get_analytics))
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(ceo_identity.clone(), Some(Role::Ceo), req, next)
        }));

    // Driver area
    let driver_identity = identity.clone();
    let driver_routes = Router::new()
        .route("/pickups", get(api::my_pickups))
        .route("/pickups/{id}/status", put(api::update_pickup_status))
        .route("/availability", put(api::set_availability))
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(driver_identity.clone(), Some(Role::Driver), req, next)
        }));

    let api_routes = public_routes
        .merge(session_routes)
        .nest("/admin", admin_routes)
        .nest("/driver", driver_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Catch-all for unmatched paths.
async fn not_found() -> errors::AppError {
    errors::AppError::NotFound("Route not found".to_string())
}
