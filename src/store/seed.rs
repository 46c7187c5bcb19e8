//! Seed data loaded into the stores at startup.

use crate::models::{
    Booking, BookingStatus, Driver, DriverStatus, Role, Service, User,
};

/// Seeded monthly revenue figure (KES) for the dashboard and analytics.
/// Fares are not tracked per booking yet, so this stays a fixed figure.
pub const MONTHLY_REVENUE_KES: u64 = 2_450_000;

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            username: "ephy".to_string(),
            password: "trl".to_string(),
            role: Role::Ceo,
            name: "Ephy - CEO".to_string(),
            driver_id: None,
        },
        User {
            id: "2".to_string(),
            username: "driver1".to_string(),
            password: "trl".to_string(),
            role: Role::Driver,
            name: "James Mwangi".to_string(),
            driver_id: Some("d1".to_string()),
        },
        User {
            id: "3".to_string(),
            username: "driver2".to_string(),
            password: "trl".to_string(),
            role: Role::Driver,
            name: "Peter Ochieng".to_string(),
            driver_id: Some("d2".to_string()),
        },
    ]
}

pub fn drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: "d1".to_string(),
            name: "James Mwangi".to_string(),
            phone: "0722345678".to_string(),
            id_number: "28456789".to_string(),
            car_model: "Toyota Prado TX".to_string(),
            vehicle_reg: "KCB 456X".to_string(),
            enrollment_date: "2023-03-15".to_string(),
            completed_trips: 156,
            status: DriverStatus::Active,
        },
        Driver {
            id: "d2".to_string(),
            name: "Peter Ochieng".to_string(),
            phone: "0733456789".to_string(),
            id_number: "29567890".to_string(),
            car_model: "Mercedes V-Class".to_string(),
            vehicle_reg: "KDD 789Y".to_string(),
            enrollment_date: "2023-06-20".to_string(),
            completed_trips: 98,
            status: DriverStatus::Active,
        },
        Driver {
            id: "d3".to_string(),
            name: "David Kamau".to_string(),
            phone: "0744567890".to_string(),
            id_number: "30678901".to_string(),
            car_model: "Land Cruiser VX".to_string(),
            vehicle_reg: "KCE 123Z".to_string(),
            enrollment_date: "2024-01-10".to_string(),
            completed_trips: 45,
            status: DriverStatus::Off,
        },
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "b1".to_string(),
            ticket_id: "TRL-2024-001".to_string(),
            passenger_name: "Sarah Njoki".to_string(),
            contact_phone: "0712345678".to_string(),
            pickup_location: "Westlands, Nairobi".to_string(),
            destination: "JKIA Terminal 1".to_string(),
            pickup_date_time: "2024-01-20T08:00:00".to_string(),
            passengers: 2,
            service_type: "Airport Transfers".to_string(),
            notes: None,
            status: BookingStatus::Confirmed,
            assigned_driver: Some("d1".to_string()),
            created_at: "2024-01-19T14:30:00".to_string(),
        },
        Booking {
            id: "b2".to_string(),
            ticket_id: "TRL-2024-002".to_string(),
            passenger_name: "Michael Otieno".to_string(),
            contact_phone: "0723456789".to_string(),
            pickup_location: "Karen, Nairobi".to_string(),
            destination: "Masai Mara Reserve".to_string(),
            pickup_date_time: "2024-01-21T06:00:00".to_string(),
            passengers: 4,
            service_type: "Game Drive".to_string(),
            notes: Some("Safari trip for the weekend".to_string()),
            status: BookingStatus::DriverOnWay,
            assigned_driver: Some("d2".to_string()),
            created_at: "2024-01-18T10:00:00".to_string(),
        },
        Booking {
            id: "b3".to_string(),
            ticket_id: "TRL-2024-003".to_string(),
            passenger_name: "Grace Wanjiku".to_string(),
            contact_phone: "0734567890".to_string(),
            pickup_location: "CBD, Nairobi".to_string(),
            destination: "Kilimani Office Park".to_string(),
            pickup_date_time: "2024-01-20T07:30:00".to_string(),
            passengers: 1,
            service_type: "Corporate Rides".to_string(),
            notes: None,
            status: BookingStatus::EnRoute,
            assigned_driver: Some("d1".to_string()),
            created_at: "2024-01-19T18:00:00".to_string(),
        },
        Booking {
            id: "b4".to_string(),
            ticket_id: "TRL-2024-004".to_string(),
            passenger_name: "John Kimani".to_string(),
            contact_phone: "0745678901".to_string(),
            pickup_location: "Lavington, Nairobi".to_string(),
            destination: "Lake Naivasha".to_string(),
            pickup_date_time: "2024-01-22T09:00:00".to_string(),
            passengers: 6,
            service_type: "Family Drive".to_string(),
            notes: Some("Family outing with kids".to_string()),
            status: BookingStatus::Confirmed,
            assigned_driver: Some("d3".to_string()),
            created_at: "2024-01-19T20:00:00".to_string(),
        },
        Booking {
            id: "b5".to_string(),
            ticket_id: "TRL-2024-005".to_string(),
            passenger_name: "Emily Achieng".to_string(),
            contact_phone: "0756789012".to_string(),
            pickup_location: "Upperhill, Nairobi".to_string(),
            destination: "Diani Beach".to_string(),
            pickup_date_time: "2024-01-25T05:00:00".to_string(),
            passengers: 3,
            service_type: "Road Trips".to_string(),
            notes: None,
            status: BookingStatus::Completed,
            assigned_driver: Some("d2".to_string()),
            created_at: "2024-01-15T12:00:00".to_string(),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "corporate".to_string(),
            name: "Corporate Rides".to_string(),
            description: "Professional transportation for business executives and corporate events. Reliable, punctual, and comfortable.".to_string(),
        },
        Service {
            id: "airport".to_string(),
            name: "Airport Transfers".to_string(),
            description: "Seamless airport pickups and drop-offs. We track your flight and adjust timing accordingly.".to_string(),
        },
        Service {
            id: "game-drive".to_string(),
            name: "Game Drive".to_string(),
            description: "Experience Kenya's wildlife with our safari-ready vehicles and experienced drivers.".to_string(),
        },
        Service {
            id: "excursion".to_string(),
            name: "Excursion".to_string(),
            description: "Day trips and tours to exciting destinations. Perfect for tourists and locals alike.".to_string(),
        },
        Service {
            id: "team-building".to_string(),
            name: "Team Building".to_string(),
            description: "Transport solutions for corporate team building events and group activities.".to_string(),
        },
        Service {
            id: "road-trips".to_string(),
            name: "Road Trips".to_string(),
            description: "Long-distance travel made comfortable. Explore Kenya with reliable transportation.".to_string(),
        },
        Service {
            id: "family-drive".to_string(),
            name: "Family Drive".to_string(),
            description: "Safe and comfortable rides for the whole family. Child-friendly vehicles available.".to_string(),
        },
    ]
}
