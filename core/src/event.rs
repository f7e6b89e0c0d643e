//! Booking events: the record of every applied store transition.
//!
//! RULE: Every store transition returns exactly one event.
//! The session appends each one to its event log.

use crate::{
    booking::{BoardType, WizardStep},
    types::{DayIndex, HotelId, MealId, SessionId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingEvent {
    // ── Configuration ──────────────────────────────
    CitizenshipSet {
        citizenship: String,
    },
    StartDateSet {
        start_date: Option<NaiveDate>,
    },
    NumberOfDaysSet {
        number_of_days: u32,
    },
    DestinationSet {
        destination_country: String,
    },
    BoardTypeSet {
        board_type: BoardType,
    },

    // ── Daily selections ───────────────────────────
    DailySelectionsInitialized {
        days:       usize,
        first_date: Option<NaiveDate>,
    },
    HotelSelected {
        day_index: DayIndex,
        hotel_id:  HotelId,
    },
    LunchSelected {
        day_index:      DayIndex,
        lunch_id:       Option<MealId>,
        /// Half board displaced a dinner on this write.
        cleared_dinner: bool,
    },
    DinnerSelected {
        day_index:     DayIndex,
        dinner_id:     Option<MealId>,
        cleared_lunch: bool,
    },
    /// A per-day write addressed a day outside the trip. State untouched.
    DayIndexRejected {
        day_index: DayIndex,
        days:      usize,
    },

    // ── Navigation ─────────────────────────────────
    StepChanged {
        from: WizardStep,
        to:   WizardStep,
    },
    BookingReset,
}

impl BookingEvent {
    /// Stable string name of the variant, for log lines and the event log.
    pub fn type_name(&self) -> &'static str {
        match self {
            BookingEvent::CitizenshipSet { .. }             => "citizenship_set",
            BookingEvent::StartDateSet { .. }               => "start_date_set",
            BookingEvent::NumberOfDaysSet { .. }            => "number_of_days_set",
            BookingEvent::DestinationSet { .. }             => "destination_set",
            BookingEvent::BoardTypeSet { .. }               => "board_type_set",
            BookingEvent::DailySelectionsInitialized { .. } => "daily_selections_initialized",
            BookingEvent::HotelSelected { .. }              => "hotel_selected",
            BookingEvent::LunchSelected { .. }              => "lunch_selected",
            BookingEvent::DinnerSelected { .. }             => "dinner_selected",
            BookingEvent::DayIndexRejected { .. }           => "day_index_rejected",
            BookingEvent::StepChanged { .. }                => "step_changed",
            BookingEvent::BookingReset                      => "booking_reset",
        }
    }
}

/// One row in a session's in-memory event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLogEntry {
    pub seq:        u64,
    pub session_id: SessionId,
    pub event_type: String,
    pub event:      BookingEvent,
}
