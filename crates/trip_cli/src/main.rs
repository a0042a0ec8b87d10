//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build a seeded store and print a deterministic overview per trip.
//! - Optionally start file logging when an absolute log directory is given.

use trip_core::{default_log_level, init_logging, TripService, TripStore};

fn main() {
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut store = TripStore::new();
    let trip_ids: Vec<String> = store.list_trips().iter().map(|trip| trip.id.clone()).collect();
    let service = TripService::new(&mut store);

    println!("trip_core version={}", trip_core::core_version());
    for trip_id in trip_ids {
        let summary = service.trip_summary(&trip_id);
        let Some(trip) = summary.trip else {
            continue;
        };
        println!(
            "{} | {} | {} | schedule={} spent={} checklist={}/{}",
            trip.title,
            trip.location,
            trip.period(),
            summary.schedule_count,
            summary.expense_total,
            summary.checklist.checked,
            summary.checklist.total
        );
        for item in service.store().list_schedule(&trip_id) {
            println!("  {} {}", item.time, item.title);
        }
    }
}
