use chrono::NaiveDate;
use tripbook_core::{
    booking::{BoardType, BookingState},
    event::BookingEvent,
    store::BookingStore,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn configured_store(start: NaiveDate, days: u32) -> BookingStore {
    let mut store = BookingStore::new();
    store.set_citizenship("Germany");
    store.set_start_date(Some(start));
    store.set_number_of_days(days);
    store.set_destination_country("Turkey");
    store.set_board_type(BoardType::FullBoard);
    store
}

#[test]
fn three_day_trip_gets_consecutive_dates() {
    let mut store = configured_store(date(2025, 6, 1), 3);
    store.initialize_daily_selections();

    let dates: Vec<NaiveDate> = store
        .state()
        .daily_selections
        .iter()
        .map(|d| d.date)
        .collect();
    assert_eq!(dates, vec![date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 3)]);
}

#[test]
fn slot_count_matches_day_count() {
    for days in 1..=45 {
        let start = date(2025, 12, 20);
        let mut store = configured_store(start, days);
        store.initialize_daily_selections();

        let slots = &store.state().daily_selections;
        assert_eq!(slots.len(), days as usize, "wrong slot count for {days} days");
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!((slot.date - start).num_days(), i as i64);
        }
    }
}

#[test]
fn fresh_slots_have_no_references() {
    let mut store = configured_store(date(2025, 6, 1), 4);
    store.initialize_daily_selections();

    for day in &store.state().daily_selections {
        assert_eq!(day.hotel_id, None);
        assert_eq!(day.lunch_id, None);
        assert_eq!(day.dinner_id, None);
    }
}

#[test]
fn reinitializing_discards_per_day_edits() {
    let mut store = configured_store(date(2025, 6, 1), 2);
    store.initialize_daily_selections();
    store.update_daily_hotel(0, 1);
    store.update_daily_lunch(1, Some(2));

    store.set_number_of_days(3);
    store.initialize_daily_selections();

    let slots = &store.state().daily_selections;
    assert_eq!(slots.len(), 3);
    assert!(slots.iter().all(|d| d.hotel_id.is_none() && d.lunch_id.is_none()));
}

#[test]
fn no_start_date_yields_no_slots() {
    let mut store = BookingStore::new();
    store.set_number_of_days(5);

    let event = store.initialize_daily_selections();

    assert!(store.state().daily_selections.is_empty());
    assert_eq!(
        event,
        BookingEvent::DailySelectionsInitialized { days: 0, first_date: None }
    );
}

#[test]
fn out_of_range_day_is_rejected_without_change() {
    let mut store = configured_store(date(2025, 6, 1), 2);
    store.initialize_daily_selections();
    let before = store.snapshot();

    let event = store.update_daily_hotel(2, 1);

    assert_eq!(event, BookingEvent::DayIndexRejected { day_index: 2, days: 2 });
    assert_eq!(*store.state(), *before);

    let event = store.update_daily_dinner(7, Some(3));
    assert_eq!(event, BookingEvent::DayIndexRejected { day_index: 7, days: 2 });
}

#[test]
fn snapshots_are_not_affected_by_later_transitions() {
    let mut store = configured_store(date(2025, 6, 1), 2);
    store.initialize_daily_selections();
    let before = store.snapshot();

    store.update_daily_hotel(0, 3);
    store.set_citizenship("Italy");

    assert_eq!(before.daily_selections[0].hotel_id, None);
    assert_eq!(before.citizenship, "Germany");
    assert_eq!(store.state().daily_selections[0].hotel_id, Some(3));
    assert_eq!(store.state().citizenship, "Italy");
}

#[test]
fn field_setters_touch_only_their_field() {
    let mut store = configured_store(date(2025, 6, 1), 2);
    store.initialize_daily_selections();
    store.update_daily_hotel(1, 2);
    let before = store.snapshot();

    store.set_destination_country("Italy");

    let after = store.state();
    assert_eq!(after.destination_country, "Italy");
    assert_eq!(after.citizenship, before.citizenship);
    assert_eq!(after.start_date, before.start_date);
    assert_eq!(after.number_of_days, before.number_of_days);
    assert_eq!(after.board_type, before.board_type);
    assert_eq!(after.daily_selections, before.daily_selections);
    assert_eq!(after.current_step, before.current_step);
}

#[test]
fn reset_restores_defaults() {
    let mut store = configured_store(date(2025, 6, 1), 3);
    store.initialize_daily_selections();
    store.update_daily_hotel(0, 1);

    store.reset_booking();

    let state = store.state();
    assert_eq!(*state, BookingState::default());
    assert_eq!(state.number_of_days, 1);
    assert!(state.daily_selections.is_empty());
    assert!(state.board_type.is_none());
}
