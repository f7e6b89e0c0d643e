//! wizard-runner: headless driver for the trip booking wizard.
//!
//! Usage:
//!   wizard-runner --citizenship Germany --destination Turkey \
//!                 --start 2025-06-01 --days 3 --board HB --hotel 1
//!   wizard-runner --data-dir ./data --ipc-mode

use anyhow::Result;
use tripbook_core::{
    booking::{parse_form_date, BoardType, StepStatus, WizardStep},
    command::BookingCommand,
    config::WizardConfig,
    reference::{Country, Hotel, MealOptions},
    session::BookingSession,
    summary::BookingSummary,
    types::HotelId,
    wizard::{FieldError, MealAvailability, StepOutcome, ValidationError},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Command { command: BookingCommand },
    Next,
    Back,
    StartOver,
    Export,
    Quit,
}

#[derive(serde::Serialize)]
struct StepProgress {
    step:   WizardStep,
    label:  &'static str,
    status: StepStatus,
}

#[derive(serde::Serialize)]
struct DayRow {
    day_index: usize,
    date:      chrono::NaiveDate,
    hotel_id:  Option<u32>,
    lunch_id:  Option<u32>,
    dinner_id: Option<u32>,
    meals:     MealAvailability,
}

#[derive(serde::Serialize)]
struct UiState {
    session_id:          String,
    current_step:        WizardStep,
    progress:            Vec<StepProgress>,
    citizenship:         String,
    start_date:          Option<chrono::NaiveDate>,
    number_of_days:      u32,
    destination_country: String,
    board_type:          Option<BoardType>,
    board_hint:          Option<&'static str>,
    countries:           Vec<Country>,
    hotels:              Vec<Hotel>,
    meals:               Option<MealOptions>,
    days:                Vec<DayRow>,
    field_errors:        Vec<FieldError>,
    blocking_message:    Option<String>,
    summary:             Option<BookingSummary>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = string_arg(&args, "--data-dir");

    let config = match data_dir {
        Some(dir) => WizardConfig::load(dir)?,
        None => {
            log::info!("no --data-dir given, using builtin reference data");
            WizardConfig::builtin()
        }
    };
    let mut session = BookingSession::new(config);

    if ipc_mode {
        run_ipc_loop(&mut session)
    } else {
        run_scripted(&mut session, &args)
    }
}

fn run_ipc_loop(session: &mut BookingSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let Some(reply) = respond(session, cmd)? else {
            break;
        };
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    log::info!("session {}: {} events recorded", session.session_id, session.events().len());
    Ok(())
}

/// One reply line per command; `None` on quit.
fn respond(session: &mut BookingSession, cmd: IpcCommand) -> Result<Option<String>> {
    let blocked = match cmd {
        IpcCommand::Quit => return Ok(None),
        IpcCommand::GetState => None,
        IpcCommand::Command { command } => {
            if let Err(e) = session.submit_edit(command) {
                return Ok(Some(serde_json::json!({ "error": e.to_string() }).to_string()));
            }
            None
        }
        IpcCommand::Next => blocked_by(session.next()),
        IpcCommand::Back => blocked_by(session.back()),
        IpcCommand::StartOver => {
            session.start_over();
            None
        }
        IpcCommand::Export => return Ok(Some(session.export_json()?)),
    };

    let state = build_ui_state(session, blocked);
    Ok(Some(serde_json::to_string(&state)?))
}

/// Drive all three steps from flags, then print the summary.
fn run_scripted(session: &mut BookingSession, args: &[String]) -> Result<()> {
    let start_date = match string_arg(args, "--start") {
        Some(raw) => parse_form_date(raw)?,
        None => None,
    };
    let board_type = string_arg(args, "--board")
        .map(str::parse::<BoardType>)
        .transpose()?;

    session.submit(BookingCommand::SetCitizenship {
        citizenship: string_arg(args, "--citizenship").unwrap_or_default().to_string(),
    });
    session.submit(BookingCommand::SetStartDate { start_date });
    session.submit(BookingCommand::SetNumberOfDays {
        number_of_days: parse_arg(args, "--days", 1u32),
    });
    session.submit(BookingCommand::SetDestinationCountry {
        destination_country: string_arg(args, "--destination").unwrap_or_default().to_string(),
    });
    if let Some(board_type) = board_type {
        session.submit(BookingCommand::SetBoardType { board_type });
    }

    if let Some(blocked) = blocked_by(session.next()) {
        for error in blocked.field_errors() {
            println!("  {:?}: {}", error.field, error.message);
        }
        anyhow::bail!("configuration incomplete: {blocked}");
    }

    // One hotel for every night: --hotel, else the destination's first.
    let hotel_id = hotel_arg(args)?.or_else(|| {
        session
            .reference()
            .hotels_for(&session.state().destination_country)
            .first()
            .map(|h| h.id)
    });
    if let Some(hotel_id) = hotel_id {
        for day_index in 0..session.state().daily_selections.len() {
            session.submit(BookingCommand::UpdateDailyHotel { day_index, hotel_id });
        }
    }

    if let Some(blocked) = blocked_by(session.next()) {
        anyhow::bail!("daily selection incomplete: {blocked}");
    }

    print!("{}", session.summary().render_text());
    Ok(())
}

fn hotel_arg(args: &[String]) -> Result<Option<HotelId>> {
    string_arg(args, "--hotel")
        .map(|raw| {
            raw.parse::<HotelId>()
                .map_err(|e| anyhow::anyhow!("Invalid --hotel '{raw}': {e}"))
        })
        .transpose()
}

fn blocked_by(outcome: StepOutcome) -> Option<ValidationError> {
    match outcome {
        StepOutcome::Blocked(error) => Some(error),
        StepOutcome::Moved { .. } | StepOutcome::Unchanged => None,
    }
}

fn build_ui_state(session: &BookingSession, blocked: Option<ValidationError>) -> UiState {
    let state = session.snapshot();
    let reference = session.reference();
    let current = state.current_step;

    let progress = WizardStep::ALL
        .into_iter()
        .map(|step| StepProgress {
            step,
            label: step.label(),
            status: step.status(current),
        })
        .collect();

    let days = state
        .daily_selections
        .iter()
        .enumerate()
        .map(|(day_index, day)| DayRow {
            day_index,
            date: day.date,
            hotel_id: day.hotel_id,
            lunch_id: day.lunch_id,
            dinner_id: day.dinner_id,
            meals: MealAvailability::for_day(state.board_type, day),
        })
        .collect();

    let (field_errors, blocking_message) = match blocked {
        Some(ValidationError::InvalidFields { errors }) => (errors, None),
        Some(incomplete @ ValidationError::IncompleteSelection { .. }) => {
            (Vec::new(), Some(incomplete.to_string()))
        }
        None => (Vec::new(), None),
    };

    UiState {
        session_id: session.session_id.clone(),
        current_step: current,
        progress,
        citizenship: state.citizenship.clone(),
        start_date: state.start_date,
        number_of_days: state.number_of_days,
        destination_country: state.destination_country.clone(),
        board_type: state.board_type,
        board_hint: state.board_type.map(BoardType::hint),
        countries: reference.countries.clone(),
        hotels: reference.hotels_for(&state.destination_country).to_vec(),
        meals: reference.meals_for(&state.destination_country).cloned(),
        days,
        field_errors,
        blocking_message,
        summary: (current == WizardStep::Summary).then(|| session.summary()),
    }
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn reply(session: &mut BookingSession, line: &str) -> serde_json::Value {
        let cmd: IpcCommand = serde_json::from_str(line).unwrap();
        let out = respond(session, cmd).unwrap().unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn raw_step_command_is_refused() {
        let mut session = BookingSession::with_id("ipc".into(), WizardConfig::builtin());

        let out = reply(
            &mut session,
            r#"{"type":"command","command":{"cmd":"set_current_step","step":3}}"#,
        );

        assert!(out["error"].is_string());
        assert_eq!(session.state().current_step, WizardStep::Configuration);
    }

    #[test]
    fn form_edit_returns_ui_state() {
        let mut session = BookingSession::with_id("ipc".into(), WizardConfig::builtin());

        let out = reply(
            &mut session,
            r#"{"type":"command","command":{"cmd":"set_board_type","board_type":"HB"}}"#,
        );

        assert_eq!(out["board_type"], "HB");
        assert_eq!(out["current_step"], 1);
    }

    #[test]
    fn export_carries_summary_and_text() {
        let mut session = BookingSession::with_id("ipc".into(), WizardConfig::builtin());

        let out = reply(&mut session, r#"{"type":"export"}"#);

        assert_eq!(out["summary"]["grand_total"], 0);
        assert!(out["text"].as_str().unwrap().contains("GRAND TOTAL: $0"));
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut session = BookingSession::with_id("ipc".into(), WizardConfig::builtin());
        let cmd: IpcCommand = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        assert!(respond(&mut session, cmd).unwrap().is_none());
    }

    #[test]
    fn unparseable_hotel_is_an_error() {
        assert!(hotel_arg(&args(&["--hotel", "grand"])).is_err());
        assert_eq!(hotel_arg(&args(&["--hotel", "4"])).unwrap(), Some(4));
        assert_eq!(hotel_arg(&args(&["--days", "2"])).unwrap(), None);
    }
}
