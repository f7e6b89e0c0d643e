use chrono::NaiveDate;
use tripbook_core::{
    booking::{BoardType, WizardStep},
    command::BookingCommand,
    error::WizardError,
    event::BookingEvent,
    session::BookingSession,
};

#[test]
fn commands_parse_from_ui_json() {
    let cases = [
        (
            r#"{"cmd":"set_start_date","start_date":"2025-06-01"}"#,
            BookingCommand::SetStartDate { start_date: NaiveDate::from_ymd_opt(2025, 6, 1) },
        ),
        (
            r#"{"cmd":"set_board_type","board_type":"HB"}"#,
            BookingCommand::SetBoardType { board_type: BoardType::HalfBoard },
        ),
        (
            r#"{"cmd":"update_daily_lunch","day_index":2,"lunch_id":null}"#,
            BookingCommand::UpdateDailyLunch { day_index: 2, lunch_id: None },
        ),
        (
            r#"{"cmd":"update_daily_dinner","day_index":0}"#,
            BookingCommand::UpdateDailyDinner { day_index: 0, dinner_id: None },
        ),
        (
            r#"{"cmd":"set_current_step","step":3}"#,
            BookingCommand::SetCurrentStep { step: WizardStep::Summary },
        ),
        (r#"{"cmd":"reset_booking"}"#, BookingCommand::ResetBooking),
    ];

    for (json, expected) in cases {
        let parsed: BookingCommand = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected, "parsing {json}");
    }
}

#[test]
fn invalid_step_and_board_codes_are_rejected() {
    assert!(serde_json::from_str::<BookingCommand>(r#"{"cmd":"set_current_step","step":4}"#).is_err());
    assert!(serde_json::from_str::<BookingCommand>(r#"{"cmd":"set_board_type","board_type":"AI"}"#).is_err());
}

#[test]
fn every_submission_is_logged_in_order() {
    let mut session = BookingSession::build_test("log-order".into());

    session.submit(BookingCommand::SetCitizenship { citizenship: "Germany".into() });
    session.submit(BookingCommand::SetBoardType { board_type: BoardType::NoBoard });
    session.submit(BookingCommand::UpdateDailyHotel { day_index: 0, hotel_id: 1 });

    let log = session.events();
    assert_eq!(log.len(), 3);
    let seqs: Vec<u64> = log.iter().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3]);
    let types: Vec<&str> = log.iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(types, vec!["citizenship_set", "board_type_set", "day_index_rejected"]);
    assert!(log.iter().all(|e| e.session_id == "log-order"));
}

#[test]
fn navigation_events_are_logged() {
    let mut session = BookingSession::build_test("log-nav".into());
    session.submit(BookingCommand::SetCitizenship { citizenship: "Germany".into() });
    session.submit(BookingCommand::SetStartDate { start_date: NaiveDate::from_ymd_opt(2025, 6, 1) });
    session.submit(BookingCommand::SetDestinationCountry { destination_country: "Italy".into() });
    session.submit(BookingCommand::SetBoardType { board_type: BoardType::FullBoard });

    session.next();

    let tail: Vec<&BookingEvent> = session.events().iter().rev().take(2).map(|e| &e.event).collect();
    assert_eq!(
        tail,
        vec![
            &BookingEvent::StepChanged { from: WizardStep::Configuration, to: WizardStep::DailySelection },
            &BookingEvent::DailySelectionsInitialized {
                days:       1,
                first_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            },
        ]
    );
}

#[test]
fn blocked_navigation_logs_nothing() {
    let mut session = BookingSession::build_test("log-blocked".into());

    session.next();

    assert!(session.events().is_empty());
}

#[test]
fn ui_edits_cannot_move_the_wizard() {
    let mut session = BookingSession::build_test("ui-edit".into());

    for json in [
        r#"{"cmd":"set_current_step","step":3}"#,
        r#"{"cmd":"initialize_daily_selections"}"#,
        r#"{"cmd":"reset_booking"}"#,
    ] {
        let command: BookingCommand = serde_json::from_str(json).unwrap();
        let err = session.submit_edit(command).unwrap_err();
        assert!(matches!(err, WizardError::NavigationCommand { .. }), "{json}: {err}");
    }

    assert_eq!(session.state().current_step, WizardStep::Configuration);
    assert!(session.events().is_empty());

    let event = session
        .submit_edit(BookingCommand::SetCitizenship { citizenship: "Germany".into() })
        .unwrap();
    assert_eq!(event, BookingEvent::CitizenshipSet { citizenship: "Germany".into() });
    assert_eq!(session.events().len(), 1);
}

#[test]
fn sessions_get_distinct_ids() {
    let a = BookingSession::new(Default::default());
    let b = BookingSession::new(Default::default());
    assert_ne!(a.session_id, b.session_id);
}
