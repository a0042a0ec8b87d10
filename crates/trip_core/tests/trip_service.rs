use trip_core::{
    ChecklistItem, ExpenseValidationError, StoreError, Trip, TripService, TripStore, SEED_TRIP_ID,
};

#[test]
fn summary_aggregates_seed_trip() {
    let mut store = TripStore::new();
    let service = TripService::new(&mut store);

    let summary = service.trip_summary(SEED_TRIP_ID);
    assert_eq!(summary.trip.unwrap().location, "Tokyo, Japan");
    assert_eq!(summary.schedule_count, 2);
    assert_eq!(summary.expense_total, 495_000);
    assert_eq!((summary.checklist.checked, summary.checklist.total), (3, 5));
}

#[test]
fn summary_for_unknown_trip_is_empty_and_read_only() {
    let mut store = TripStore::new();
    let service = TripService::new(&mut store);

    let summary = service.trip_summary("missing");
    assert!(summary.trip.is_none());
    assert_eq!(summary.schedule_count, 0);
    assert_eq!(summary.expense_total, 0);
    assert_eq!(summary.checklist.checked, 0);
    assert!(service.store().find_checklist("missing").is_none());
}

#[test]
fn summary_for_empty_id_never_means_all_trips() {
    let mut store = TripStore::new();
    let service = TripService::new(&mut store);

    let summary = service.trip_summary("");
    assert!(summary.trip.is_none());
    assert_eq!(summary.schedule_count, 0);
    assert_eq!(summary.expense_total, 0);
    assert_eq!(summary.checklist.checked, 0);
}

#[test]
fn expense_input_parses_amount_text() {
    let mut store = TripStore::empty();
    let mut service = TripService::new(&mut store);

    let stored = service
        .add_expense_input("t1", "Museum", " 2500 ", "2025-05-02")
        .unwrap();
    assert_eq!(stored.amount, 2_500);

    let err = service
        .add_expense_input("t1", "Museum", "abc", "2025-05-02")
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidExpense(ExpenseValidationError::NonPositiveAmount(0))
    );
    assert_eq!(service.store().expense_total("t1"), 2_500);
}

#[test]
fn toggle_creates_checklist_then_flips_flag() {
    let mut store = TripStore::empty();
    store
        .add_trip(Trip::new("Busan", "Korea", "2025-06-01", "2025-06-02"))
        .unwrap();
    let trip_id = store.list_trips()[0].id.clone();
    let mut service = TripService::new(&mut store);

    let on = service
        .toggle_checklist_item(&trip_id, ChecklistItem::Charger)
        .unwrap();
    assert!(on.charger);
    assert_eq!(service.trip_summary(&trip_id).checklist.checked, 1);

    let off = service
        .toggle_checklist_item(&trip_id, ChecklistItem::Charger)
        .unwrap();
    assert!(!off.charger);
    assert_eq!(service.trip_summary(&trip_id).checklist.checked, 0);
}
