use crate::{
    booking::{BoardType, WizardStep},
    types::{DayIndex, HotelId, MealId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every store transition, in the form a user interaction submits it.
/// Each variant maps to exactly one named store operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum BookingCommand {
    // ── Step 1: configuration form ────────────────
    SetCitizenship { citizenship: String },
    SetStartDate { start_date: Option<NaiveDate> },
    SetNumberOfDays { number_of_days: u32 },
    SetDestinationCountry { destination_country: String },
    SetBoardType { board_type: BoardType },
    InitializeDailySelections,

    // ── Step 2: per-day table ─────────────────────
    UpdateDailyHotel {
        day_index: DayIndex,
        hotel_id:  HotelId,
    },
    UpdateDailyLunch {
        day_index: DayIndex,
        #[serde(default)]
        lunch_id:  Option<MealId>,
    },
    UpdateDailyDinner {
        day_index: DayIndex,
        #[serde(default)]
        dinner_id: Option<MealId>,
    },

    // ── Navigation ────────────────────────────────
    SetCurrentStep { step: WizardStep },
    ResetBooking,
}

impl BookingCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BookingCommand::SetCitizenship { .. }        => "set_citizenship",
            BookingCommand::SetStartDate { .. }          => "set_start_date",
            BookingCommand::SetNumberOfDays { .. }       => "set_number_of_days",
            BookingCommand::SetDestinationCountry { .. } => "set_destination_country",
            BookingCommand::SetBoardType { .. }          => "set_board_type",
            BookingCommand::InitializeDailySelections    => "initialize_daily_selections",
            BookingCommand::UpdateDailyHotel { .. }      => "update_daily_hotel",
            BookingCommand::UpdateDailyLunch { .. }      => "update_daily_lunch",
            BookingCommand::UpdateDailyDinner { .. }     => "update_daily_dinner",
            BookingCommand::SetCurrentStep { .. }        => "set_current_step",
            BookingCommand::ResetBooking                 => "reset_booking",
        }
    }

    /// Field and per-day edits. The rest move the wizard and belong to the
    /// controller.
    pub fn is_form_edit(&self) -> bool {
        !matches!(
            self,
            BookingCommand::InitializeDailySelections
                | BookingCommand::SetCurrentStep { .. }
                | BookingCommand::ResetBooking
        )
    }
}
