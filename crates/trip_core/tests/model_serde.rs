use trip_core::{ChecklistItem, ChecklistState, Expense, ScheduleItem, Trip};

#[test]
fn trip_uses_camel_case_wire_fields() {
    let trip = Trip::with_id("t1", "Osaka", "Japan", "2025-05-01", "2025-05-03");
    let json = serde_json::to_value(&trip).unwrap();

    assert_eq!(json["id"], "t1");
    assert_eq!(json["startDate"], "2025-05-01");
    assert_eq!(json["endDate"], "2025-05-03");

    let decoded: Trip = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, trip);
}

#[test]
fn child_records_serialize_trip_id() {
    let item = ScheduleItem::new("t1", "Castle visit", "09:00", "bring ticket");
    let expense = Expense::try_new("t1", "Hotel", 200_000, "2025-05-01").unwrap();

    assert_eq!(serde_json::to_value(&item).unwrap()["tripId"], "t1");
    let expense_json = serde_json::to_value(&expense).unwrap();
    assert_eq!(expense_json["tripId"], "t1");
    assert_eq!(expense_json["amount"], 200_000);
}

#[test]
fn checklist_state_uses_flag_names() {
    let state = ChecklistState::unchecked("t1").with(ChecklistItem::HotelBooked, true);
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["hotelBooked"], true);
    assert_eq!(json["exchangeDone"], false);
    assert_eq!(
        serde_json::to_value(ChecklistItem::ExchangeDone).unwrap(),
        "exchangeDone"
    );
}

#[test]
fn checklist_items_have_labels_in_display_order() {
    let labels: Vec<_> = ChecklistItem::ALL.iter().map(|item| item.label()).collect();
    assert_eq!(labels.len(), 5);
    assert_eq!(labels[0], "Passport");
    assert_eq!(labels[4], "Currency exchanged");
}
