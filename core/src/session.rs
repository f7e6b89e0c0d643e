//! A booking session: one user's pass through the wizard.
//!
//! Owns the store, the reference data, the controller, and an in-memory
//! event log. Nothing here outlives the process.

use crate::{
    booking::BookingState,
    command::BookingCommand,
    config::WizardConfig,
    error::{WizardError, WizardResult},
    event::{BookingEvent, EventLogEntry},
    pricing::{compute_daily_prices, DayPrice},
    reference::ReferenceData,
    store::BookingStore,
    summary::{BookingSummary, SummaryExport},
    types::{DayIndex, SessionId},
    wizard::{MealAvailability, StepOutcome, WizardController},
};
use std::sync::Arc;

#[derive(Debug)]
pub struct BookingSession {
    pub session_id: SessionId,
    config:         WizardConfig,
    controller:     WizardController,
    store:          BookingStore,
    event_log:      Vec<EventLogEntry>,
}

impl BookingSession {
    pub fn new(config: WizardConfig) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), config)
    }

    pub fn with_id(session_id: SessionId, config: WizardConfig) -> Self {
        log::info!("session {session_id}: started");
        Self {
            controller: WizardController::new(config.settings.clone()),
            store: BookingStore::new(),
            event_log: Vec::new(),
            config,
            session_id,
        }
    }

    /// Session over the builtin catalog with default settings.
    pub fn build_test(session_id: SessionId) -> Self {
        Self::with_id(session_id, WizardConfig::default_test())
    }

    pub fn state(&self) -> &BookingState {
        self.store.state()
    }

    pub fn snapshot(&self) -> Arc<BookingState> {
        self.store.snapshot()
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.config.reference
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn events(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    /// Apply one user interaction to the store.
    pub fn submit(&mut self, command: BookingCommand) -> BookingEvent {
        let event = self.store.apply(command);
        self.record(event.clone());
        event
    }

    /// Apply a form edit coming from the UI. Navigation commands are
    /// refused so that step changes always pass through the controller.
    pub fn submit_edit(&mut self, command: BookingCommand) -> WizardResult<BookingEvent> {
        if !command.is_form_edit() {
            log::warn!("session {}: refused raw {}", self.session_id, command.name());
            return Err(WizardError::NavigationCommand { command: command.name() });
        }
        Ok(self.submit(command))
    }

    pub fn next(&mut self) -> StepOutcome {
        let outcome = self.controller.next(&mut self.store);
        self.record_outcome(&outcome);
        outcome
    }

    pub fn back(&mut self) -> StepOutcome {
        let outcome = self.controller.back(&mut self.store);
        self.record_outcome(&outcome);
        outcome
    }

    pub fn start_over(&mut self) {
        for event in self.controller.start_over(&mut self.store) {
            self.record(event);
        }
    }

    pub fn meal_availability(&self, day_index: DayIndex) -> Option<MealAvailability> {
        let state = self.store.state();
        state
            .daily_selections
            .get(day_index)
            .map(|day| MealAvailability::for_day(state.board_type, day))
    }

    pub fn daily_prices(&self) -> Vec<DayPrice> {
        let state = self.store.state();
        compute_daily_prices(
            &state.daily_selections,
            &state.destination_country,
            &self.config.reference,
        )
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary::build(self.store.state(), &self.config.reference)
    }

    pub fn export(&self) -> SummaryExport {
        let summary = self.summary();
        SummaryExport { text: summary.render_text(), summary }
    }

    /// The export as a single JSON line.
    pub fn export_json(&self) -> WizardResult<String> {
        Ok(serde_json::to_string(&self.export())?)
    }

    fn record_outcome(&mut self, outcome: &StepOutcome) {
        if let StepOutcome::Moved { events, .. } = outcome {
            for event in events {
                self.record(event.clone());
            }
        }
    }

    fn record(&mut self, event: BookingEvent) {
        let seq = self.event_log.len() as u64 + 1;
        log::debug!("session {}: #{seq} {}", self.session_id, event.type_name());
        self.event_log.push(EventLogEntry {
            seq,
            session_id: self.session_id.clone(),
            event_type: event.type_name().to_string(),
            event,
        });
    }
}
