//! Booking state model, the single source of truth for the wizard.
//!
//! RULE: Only store.rs mutates a BookingState.
//! Everything else reads snapshots.

use crate::{
    error::{WizardError, WizardResult},
    types::{HotelId, MealId},
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Meal-inclusion policy for a stay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BoardType {
    #[serde(rename = "FB")]
    FullBoard,
    #[serde(rename = "HB")]
    HalfBoard,
    #[serde(rename = "NB")]
    NoBoard,
}

impl BoardType {
    pub const ALL: [BoardType; 3] = [
        BoardType::FullBoard,
        BoardType::HalfBoard,
        BoardType::NoBoard,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BoardType::FullBoard => "FB",
            BoardType::HalfBoard => "HB",
            BoardType::NoBoard   => "NB",
        }
    }

    /// Whether lunch and dinner can be picked at all.
    pub fn allows_meals(self) -> bool {
        !matches!(self, BoardType::NoBoard)
    }

    /// Half board: lunch and dinner are mutually exclusive per day.
    pub fn is_exclusive(self) -> bool {
        matches!(self, BoardType::HalfBoard)
    }

    /// Guidance shown above the per-day table.
    pub fn hint(self) -> &'static str {
        match self {
            BoardType::FullBoard => "Full Board - Select both lunch and dinner",
            BoardType::HalfBoard => "Half Board - Select either lunch OR dinner (not both)",
            BoardType::NoBoard   => "No Board - Meals not included",
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BoardType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardType::ALL
            .into_iter()
            .find(|b| b.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WizardError::UnknownBoardType { code: s.to_string() })
    }
}

/// Position in the three-screen wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    #[default]
    Configuration,
    DailySelection,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Configuration,
        WizardStep::DailySelection,
        WizardStep::Summary,
    ];

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Configuration  => 1,
            WizardStep::DailySelection => 2,
            WizardStep::Summary        => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Configuration  => "Configuration",
            WizardStep::DailySelection => "Daily Selection",
            WizardStep::Summary        => "Summary",
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Configuration  => None,
            WizardStep::DailySelection => Some(WizardStep::Configuration),
            WizardStep::Summary        => Some(WizardStep::DailySelection),
        }
    }

    /// Progress indicator state of `self` while the wizard sits at `current`.
    pub fn status(self, current: WizardStep) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less    => StepStatus::Completed,
            std::cmp::Ordering::Equal   => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = WizardError;

    fn try_from(step: u8) -> Result<Self, Self::Error> {
        WizardStep::ALL
            .into_iter()
            .find(|s| s.number() == step)
            .ok_or(WizardError::StepOutOfRange { step })
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> u8 {
        step.number()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

/// One day's chosen hotel and meals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySelection {
    pub date:      NaiveDate,
    pub hotel_id:  Option<HotelId>,
    pub lunch_id:  Option<MealId>,
    pub dinner_id: Option<MealId>,
}

impl DailySelection {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            hotel_id:  None,
            lunch_id:  None,
            dinner_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingState {
    pub citizenship:         String,
    pub start_date:          Option<NaiveDate>,
    pub number_of_days:      u32,
    pub destination_country: String,
    pub board_type:          Option<BoardType>,
    pub daily_selections:    Vec<DailySelection>,
    pub current_step:        WizardStep,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            citizenship:         String::new(),
            start_date:          None,
            number_of_days:      1,
            destination_country: String::new(),
            board_type:          None,
            daily_selections:    Vec::new(),
            current_step:        WizardStep::Configuration,
        }
    }
}

impl BookingState {
    /// First and last date of the trip, once daily slots exist.
    pub fn travel_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.daily_selections.first()?;
        let last = self.daily_selections.last()?;
        Some((first.date, last.date))
    }
}

/// Last calendar day of a `days`-long trip, if the calendar reaches it.
pub fn trip_end(start: NaiveDate, days: u32) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(days.checked_sub(1)?)))
}

/// Build `days` empty slots on consecutive calendar days from `start`.
/// `None` when the trip would run past the last representable date.
pub fn daily_slots(start: NaiveDate, days: u32) -> Option<Vec<DailySelection>> {
    if days > 0 {
        trip_end(start, days)?;
    }
    (0..u64::from(days))
        .map(|i| start.checked_add_days(Days::new(i)).map(DailySelection::empty))
        .collect()
}

/// Parse a form date in `YYYY-MM-DD` form. Blank input means "not chosen".
pub fn parse_form_date(input: &str) -> WizardResult<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| WizardError::InvalidDate { input: input.to_string() })
}
