//! Operational analytics computed from live store snapshots.

use std::collections::HashMap;

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::{Booking, BookingStatus, Driver, DriverStatus};
use crate::store::seed;

/// Share of bookings per service, as a percentage of all bookings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceShare {
    pub name: String,
    pub value: u32,
}

/// Booking count for one hour of the day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyBookings {
    pub hour: String,
    pub bookings: u32,
}

/// Booking count for one pickup location.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    pub location: String,
    pub orders: u32,
}

/// Per-driver trip totals: historical roster trips plus rides completed in
/// this session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPerformance {
    pub name: String,
    pub trips: u32,
}

/// Headline monthly figures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_rides: usize,
    pub active_drivers: usize,
    pub completed_rides: usize,
    pub scheduled_pickups: usize,
    pub revenue: u64,
}

/// The full analytics report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub service_breakdown: Vec<ServiceShare>,
    pub peak_booking_times: Vec<HourlyBookings>,
    pub top_locations: Vec<LocationCount>,
    pub driver_performance: Vec<DriverPerformance>,
    pub monthly_stats: MonthlyStats,
}

/// Build the analytics report from booking and roster snapshots.
pub fn build_report(bookings: &[Booking], drivers: &[Driver]) -> AnalyticsReport {
    AnalyticsReport {
        service_breakdown: service_breakdown(bookings),
        peak_booking_times: peak_booking_times(bookings),
        top_locations: top_locations(bookings),
        driver_performance: driver_performance(bookings, drivers),
        monthly_stats: monthly_stats(bookings, drivers),
    }
}

fn service_breakdown(bookings: &[Booking]) -> Vec<ServiceShare> {
    let total = bookings.len() as f64;
    if bookings.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for booking in bookings {
        *counts.entry(booking.service_type.as_str()).or_default() += 1;
    }

    let mut shares: Vec<ServiceShare> = counts
        .into_iter()
        .map(|(name, count)| ServiceShare {
            name: name.to_string(),
            value: ((count as f64 / total) * 100.0).round() as u32,
        })
        .collect();
    shares.sort_by(|a, b| b.value.cmp(&a.value).then(a.name.cmp(&b.name)));
    shares
}

fn peak_booking_times(bookings: &[Booking]) -> Vec<HourlyBookings> {
    let mut by_hour: HashMap<u32, u32> = HashMap::new();
    for booking in bookings {
        // Pickup times arrive as local ISO strings; skip anything unparseable.
        if let Ok(dt) = NaiveDateTime::parse_from_str(&booking.pickup_date_time, "%Y-%m-%dT%H:%M:%S")
        {
            *by_hour.entry(dt.hour()).or_default() += 1;
        }
    }

    let mut hours: Vec<(u32, u32)> = by_hour.into_iter().collect();
    hours.sort_by_key(|(hour, _)| *hour);
    hours
        .into_iter()
        .map(|(hour, bookings)| HourlyBookings {
            hour: hour_label(hour),
            bookings,
        })
        .collect()
}

fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12AM".to_string(),
        12 => "12PM".to_string(),
        h if h < 12 => format!("{}AM", h),
        h => format!("{}PM", h - 12),
    }
}

fn top_locations(bookings: &[Booking]) -> Vec<LocationCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for booking in bookings {
        *counts.entry(booking.pickup_location.as_str()).or_default() += 1;
    }

    let mut locations: Vec<LocationCount> = counts
        .into_iter()
        .map(|(location, orders)| LocationCount {
            location: location.to_string(),
            orders,
        })
        .collect();
    locations.sort_by(|a, b| b.orders.cmp(&a.orders).then(a.location.cmp(&b.location)));
    locations.truncate(5);
    locations
}

fn driver_performance(bookings: &[Booking], drivers: &[Driver]) -> Vec<DriverPerformance> {
    drivers
        .iter()
        .map(|driver| {
            let session_completed = bookings
                .iter()
                .filter(|b| {
                    b.status == BookingStatus::Completed
                        && b.assigned_driver.as_deref() == Some(driver.id.as_str())
                })
                .count() as u32;
            DriverPerformance {
                name: driver.name.clone(),
                trips: driver.completed_trips + session_completed,
            }
        })
        .collect()
}

fn monthly_stats(bookings: &[Booking], drivers: &[Driver]) -> MonthlyStats {
    let completed = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count();
    MonthlyStats {
        total_rides: bookings.len(),
        active_drivers: drivers
            .iter()
            .filter(|d| d.status == DriverStatus::Active)
            .count(),
        completed_rides: completed,
        scheduled_pickups: bookings.len() - completed,
        revenue: seed::MONTHLY_REVENUE_KES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn test_service_breakdown_sums_to_roughly_100() {
        let shares = service_breakdown(&seed::bookings());
        // Five seeded bookings, five distinct services, 20% each.
        assert_eq!(shares.len(), 5);
        assert!(shares.iter().all(|s| s.value == 20));
    }

    #[test]
    fn test_service_breakdown_empty() {
        assert!(service_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_peak_booking_times_buckets_by_hour() {
        let hours = peak_booking_times(&seed::bookings());
        // Seeded pickups: 05, 06, 07, 08, 09.
        assert_eq!(hours.len(), 5);
        assert_eq!(hours[0].hour, "5AM");
        assert_eq!(hours[0].bookings, 1);
        assert_eq!(hours.last().unwrap().hour, "9AM");
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0), "12AM");
        assert_eq!(hour_label(6), "6AM");
        assert_eq!(hour_label(12), "12PM");
        assert_eq!(hour_label(17), "5PM");
        assert_eq!(hour_label(23), "11PM");
    }

    #[test]
    fn test_top_locations_capped_at_five() {
        let mut bookings = seed::bookings();
        bookings.extend(seed::bookings()); // duplicate to vary counts
        let locations = top_locations(&bookings);
        assert!(locations.len() <= 5);
        assert!(locations[0].orders >= locations.last().unwrap().orders);
    }

    #[test]
    fn test_driver_performance_counts_session_completions() {
        let report = build_report(&seed::bookings(), &seed::drivers());
        let peter = report
            .driver_performance
            .iter()
            .find(|d| d.name == "Peter Ochieng")
            .unwrap();
        // 98 roster trips + seeded completed booking b5.
        assert_eq!(peter.trips, 99);
    }

    #[test]
    fn test_monthly_stats() {
        let stats = monthly_stats(&seed::bookings(), &seed::drivers());
        assert_eq!(stats.total_rides, 5);
        assert_eq!(stats.completed_rides, 1);
        assert_eq!(stats.scheduled_pickups, 4);
        assert_eq!(stats.active_drivers, 2);
        assert_eq!(stats.revenue, seed::MONTHLY_REVENUE_KES);
    }
}
