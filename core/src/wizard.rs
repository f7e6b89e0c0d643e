//! Wizard controller. Gates forward navigation on validation.
//!
//! Validation failures are expected user-input states. They come back as
//! data in `StepOutcome::Blocked`, never as a WizardError.

use crate::{
    booking::{trip_end, BoardType, BookingState, DailySelection, WizardStep},
    config::WizardSettings,
    event::BookingEvent,
    store::BookingStore,
    types::DayIndex,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MISSING_HOTEL_MESSAGE: &str = "Please select a hotel for each day";
pub const CALENDAR_END_MESSAGE: &str = "Trip would end past the last bookable date";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    Citizenship,
    StartDate,
    NumberOfDays,
    DestinationCountry,
    BoardType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field:   ConfigField,
    pub message: String,
}

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{} configuration field(s) need attention", .errors.len())]
    InvalidFields { errors: Vec<FieldError> },

    #[error("{message}")]
    IncompleteSelection {
        message:      String,
        missing_days: Vec<DayIndex>,
    },
}

impl ValidationError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::InvalidFields { errors } => errors,
            ValidationError::IncompleteSelection { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The wizard moved. `events` are the store transitions that did it.
    Moved {
        from:   WizardStep,
        to:     WizardStep,
        events: Vec<BookingEvent>,
    },
    /// Validation failed; nothing was applied.
    Blocked(ValidationError),
    /// No step in that direction.
    Unchanged,
}

/// Which meal pickers are enabled for one day of the per-day table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealAvailability {
    pub lunch:  bool,
    pub dinner: bool,
}

impl MealAvailability {
    /// No board disables both. Half board disables the meal opposite an
    /// existing pick.
    pub fn for_day(board_type: Option<BoardType>, day: &DailySelection) -> Self {
        let allows = board_type.is_some_and(BoardType::allows_meals);
        let exclusive = board_type.is_some_and(BoardType::is_exclusive);
        Self {
            lunch:  allows && !(exclusive && day.dinner_id.is_some()),
            dinner: allows && !(exclusive && day.lunch_id.is_some()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WizardController {
    settings: WizardSettings,
}

impl WizardController {
    pub fn new(settings: WizardSettings) -> Self {
        Self { settings }
    }

    /// One error per invalid step-1 field, in form order.
    pub fn validate_configuration(&self, state: &BookingState) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, message: String| errors.push(FieldError { field, message });

        if state.citizenship.trim().is_empty() {
            push(ConfigField::Citizenship, "Please select citizenship".into());
        }
        if state.start_date.is_none() {
            push(ConfigField::StartDate, "Please select start date".into());
        }
        let too_long = self.settings.max_days.filter(|&max| state.number_of_days > max);
        let past_calendar = state
            .start_date
            .is_some_and(|start| trip_end(start, state.number_of_days).is_none());
        if state.number_of_days < 1 {
            push(ConfigField::NumberOfDays, "Days must be at least 1".into());
        } else if let Some(max) = too_long {
            push(ConfigField::NumberOfDays, format!("Days must be at most {max}"));
        } else if past_calendar {
            push(ConfigField::NumberOfDays, CALENDAR_END_MESSAGE.into());
        }
        if state.destination_country.trim().is_empty() {
            push(ConfigField::DestinationCountry, "Please select destination".into());
        }
        if state.board_type.is_none() {
            push(ConfigField::BoardType, "Please select board type".into());
        }
        errors
    }

    /// Every day needs a hotel. Meals are never required, full board included.
    pub fn validate_daily_selections(&self, state: &BookingState) -> Option<ValidationError> {
        let missing_days: Vec<DayIndex> = state
            .daily_selections
            .iter()
            .enumerate()
            .filter(|(_, day)| day.hotel_id.is_none())
            .map(|(i, _)| i)
            .collect();

        if missing_days.is_empty() {
            None
        } else {
            Some(ValidationError::IncompleteSelection {
                message: MISSING_HOTEL_MESSAGE.to_string(),
                missing_days,
            })
        }
    }

    /// Advance one step if the current screen validates.
    pub fn next(&self, store: &mut BookingStore) -> StepOutcome {
        let from = store.state().current_step;
        match from {
            WizardStep::Configuration => {
                let errors = self.validate_configuration(store.state());
                if !errors.is_empty() {
                    log::debug!("wizard: configuration blocked by {} field error(s)", errors.len());
                    return StepOutcome::Blocked(ValidationError::InvalidFields { errors });
                }
                let events = vec![
                    store.initialize_daily_selections(),
                    store.set_current_step(WizardStep::DailySelection),
                ];
                StepOutcome::Moved { from, to: WizardStep::DailySelection, events }
            }
            WizardStep::DailySelection => {
                if let Some(blocked) = self.validate_daily_selections(store.state()) {
                    log::debug!("wizard: daily selection blocked: {blocked}");
                    return StepOutcome::Blocked(blocked);
                }
                let events = vec![store.set_current_step(WizardStep::Summary)];
                StepOutcome::Moved { from, to: WizardStep::Summary, events }
            }
            WizardStep::Summary => StepOutcome::Unchanged,
        }
    }

    /// Backward moves are unconditional and keep per-day edits.
    pub fn back(&self, store: &mut BookingStore) -> StepOutcome {
        let from = store.state().current_step;
        match from.previous() {
            Some(to) => StepOutcome::Moved {
                from,
                to,
                events: vec![store.set_current_step(to)],
            },
            None => StepOutcome::Unchanged,
        }
    }

    /// The summary's "new booking" action: defaults, back on step 1.
    pub fn start_over(&self, store: &mut BookingStore) -> Vec<BookingEvent> {
        vec![
            store.reset_booking(),
            store.set_current_step(WizardStep::Configuration),
        ]
    }
}
