//! Demo data inserted once when a seeded store is constructed.

use crate::model::checklist::ChecklistState;
use crate::model::expense::Expense;
use crate::model::schedule::ScheduleItem;
use crate::model::trip::Trip;

pub const SEED_TRIP_ID: &str = "trip-001";

pub(crate) struct SeedData {
    pub trip: Trip,
    pub schedule: Vec<ScheduleItem>,
    pub expenses: Vec<Expense>,
    pub checklist: ChecklistState,
}

pub(crate) fn seed_data() -> SeedData {
    let trip = Trip::with_id(
        SEED_TRIP_ID,
        "Tokyo 3-night-4-day trip",
        "Tokyo, Japan",
        "2025-03-01",
        "2025-03-04",
    );

    let schedule = vec![
        ScheduleItem {
            id: "schedule-001".to_string(),
            trip_id: SEED_TRIP_ID.to_string(),
            title: "Senso-ji visit".to_string(),
            time: "10:00".to_string(),
            memo: "5 min walk from Asakusa station exit 1".to_string(),
        },
        ScheduleItem {
            id: "schedule-002".to_string(),
            trip_id: SEED_TRIP_ID.to_string(),
            title: "Skytree observatory".to_string(),
            time: "15:00".to_string(),
            memo: "Reservation required".to_string(),
        },
    ];

    let expenses = vec![
        Expense {
            id: "expense-001".to_string(),
            trip_id: SEED_TRIP_ID.to_string(),
            label: "Hotel payment".to_string(),
            amount: 480_000,
            date: "2025-03-01".to_string(),
        },
        Expense {
            id: "expense-002".to_string(),
            trip_id: SEED_TRIP_ID.to_string(),
            label: "Subway fares".to_string(),
            amount: 15_000,
            date: "2025-03-02".to_string(),
        },
    ];

    let checklist = ChecklistState {
        trip_id: SEED_TRIP_ID.to_string(),
        passport: true,
        charger: false,
        hotel_booked: true,
        insurance: false,
        exchange_done: true,
    };

    SeedData {
        trip,
        schedule,
        expenses,
        checklist,
    }
}
