//! Booking state store.
//!
//! RULE: All mutation goes through the named transitions below.
//! Each transition is applied to a copy-on-write snapshot, so a snapshot
//! handed out earlier never changes underneath its holder.

use crate::{
    booking::{daily_slots, BoardType, BookingState, DailySelection, WizardStep},
    command::BookingCommand,
    event::BookingEvent,
    types::{DayIndex, HotelId, MealId},
};
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    state: Arc<BookingState>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, shared. Later transitions do not affect it.
    pub fn snapshot(&self) -> Arc<BookingState> {
        Arc::clone(&self.state)
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Dispatch a submitted command to its transition.
    pub fn apply(&mut self, command: BookingCommand) -> BookingEvent {
        log::debug!("store: applying {}", command.name());
        match command {
            BookingCommand::SetCitizenship { citizenship } => self.set_citizenship(citizenship),
            BookingCommand::SetStartDate { start_date } => self.set_start_date(start_date),
            BookingCommand::SetNumberOfDays { number_of_days } => {
                self.set_number_of_days(number_of_days)
            }
            BookingCommand::SetDestinationCountry { destination_country } => {
                self.set_destination_country(destination_country)
            }
            BookingCommand::SetBoardType { board_type } => self.set_board_type(board_type),
            BookingCommand::InitializeDailySelections => self.initialize_daily_selections(),
            BookingCommand::UpdateDailyHotel { day_index, hotel_id } => {
                self.update_daily_hotel(day_index, hotel_id)
            }
            BookingCommand::UpdateDailyLunch { day_index, lunch_id } => {
                self.update_daily_lunch(day_index, lunch_id)
            }
            BookingCommand::UpdateDailyDinner { day_index, dinner_id } => {
                self.update_daily_dinner(day_index, dinner_id)
            }
            BookingCommand::SetCurrentStep { step } => self.set_current_step(step),
            BookingCommand::ResetBooking => self.reset_booking(),
        }
    }

    // ── Step 1 fields ──────────────────────────────────────────

    pub fn set_citizenship(&mut self, citizenship: impl Into<String>) -> BookingEvent {
        let citizenship = citizenship.into();
        self.write().citizenship = citizenship.clone();
        BookingEvent::CitizenshipSet { citizenship }
    }

    pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) -> BookingEvent {
        self.write().start_date = start_date;
        BookingEvent::StartDateSet { start_date }
    }

    pub fn set_number_of_days(&mut self, number_of_days: u32) -> BookingEvent {
        self.write().number_of_days = number_of_days;
        BookingEvent::NumberOfDaysSet { number_of_days }
    }

    pub fn set_destination_country(&mut self, destination_country: impl Into<String>) -> BookingEvent {
        let destination_country = destination_country.into();
        self.write().destination_country = destination_country.clone();
        BookingEvent::DestinationSet { destination_country }
    }

    /// Does not touch existing meal picks, even when switching to half board.
    pub fn set_board_type(&mut self, board_type: BoardType) -> BookingEvent {
        self.write().board_type = Some(board_type);
        BookingEvent::BoardTypeSet { board_type }
    }

    // ── Daily selections ───────────────────────────────────────

    /// Rebuild the per-day slots from start date and day count.
    /// Any earlier per-day edits are discarded.
    pub fn initialize_daily_selections(&mut self) -> BookingEvent {
        let state = self.write();
        state.daily_selections = match state.start_date {
            Some(start) => daily_slots(start, state.number_of_days).unwrap_or_else(|| {
                log::warn!(
                    "store: {}-day trip from {start} runs past the calendar, no slots built",
                    state.number_of_days
                );
                Vec::new()
            }),
            None => Vec::new(),
        };
        let days = state.daily_selections.len();
        let first_date = state.daily_selections.first().map(|d| d.date);
        log::debug!("store: initialized {days} daily slots from {first_date:?}");
        BookingEvent::DailySelectionsInitialized { days, first_date }
    }

    pub fn update_daily_hotel(&mut self, day_index: DayIndex, hotel_id: HotelId) -> BookingEvent {
        match self.day_mut(day_index) {
            Ok(day) => {
                day.hotel_id = Some(hotel_id);
                BookingEvent::HotelSelected { day_index, hotel_id }
            }
            Err(rejected) => rejected,
        }
    }

    /// Under half board, picking a lunch clears that day's dinner.
    pub fn update_daily_lunch(&mut self, day_index: DayIndex, lunch_id: Option<MealId>) -> BookingEvent {
        let exclusive = self.half_board();
        match self.day_mut(day_index) {
            Ok(day) => {
                day.lunch_id = lunch_id;
                let cleared_dinner = exclusive && lunch_id.is_some() && day.dinner_id.take().is_some();
                BookingEvent::LunchSelected { day_index, lunch_id, cleared_dinner }
            }
            Err(rejected) => rejected,
        }
    }

    /// Under half board, picking a dinner clears that day's lunch.
    pub fn update_daily_dinner(&mut self, day_index: DayIndex, dinner_id: Option<MealId>) -> BookingEvent {
        let exclusive = self.half_board();
        match self.day_mut(day_index) {
            Ok(day) => {
                day.dinner_id = dinner_id;
                let cleared_lunch = exclusive && dinner_id.is_some() && day.lunch_id.take().is_some();
                BookingEvent::DinnerSelected { day_index, dinner_id, cleared_lunch }
            }
            Err(rejected) => rejected,
        }
    }

    // ── Navigation ─────────────────────────────────────────────

    /// Plain assignment; gating is the controller's job.
    pub fn set_current_step(&mut self, step: WizardStep) -> BookingEvent {
        let from = self.state.current_step;
        self.write().current_step = step;
        log::info!("store: step {} -> {}", from.number(), step.number());
        BookingEvent::StepChanged { from, to: step }
    }

    pub fn reset_booking(&mut self) -> BookingEvent {
        self.state = Arc::new(BookingState::default());
        log::info!("store: booking reset to defaults");
        BookingEvent::BookingReset
    }

    // ── Internals ──────────────────────────────────────────────

    fn write(&mut self) -> &mut BookingState {
        Arc::make_mut(&mut self.state)
    }

    fn half_board(&self) -> bool {
        self.state.board_type.is_some_and(BoardType::is_exclusive)
    }

    /// Bounds check happens before the copy-on-write so a rejected write
    /// never detaches the state from outstanding snapshots.
    fn day_mut(&mut self, day_index: DayIndex) -> Result<&mut DailySelection, BookingEvent> {
        let days = self.state.daily_selections.len();
        if day_index >= days {
            log::warn!("store: day index {day_index} out of range for {days}-day trip");
            return Err(BookingEvent::DayIndexRejected { day_index, days });
        }
        Ok(&mut self.write().daily_selections[day_index])
    }
}
