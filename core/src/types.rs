//! Shared primitive types used across the booking wizard.

/// Identifier of a hotel inside a destination's catalog.
pub type HotelId = u32;

/// Identifier of a lunch or dinner option inside a destination's catalog.
pub type MealId = u32;

pub type CountryId = u32;

/// Zero-based position of a day within the trip.
pub type DayIndex = usize;

/// Whole currency units. Reference prices are integral, so no rounding.
pub type Price = u64;

/// The canonical booking session identifier.
pub type SessionId = String;
