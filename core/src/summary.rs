//! Priced booking summary: the data behind step 3 and its printable export.

use crate::{
    booking::BookingState,
    pricing::{compute_daily_prices, compute_grand_total, DayPrice},
    reference::ReferenceData,
    types::Price,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub citizenship:         String,
    pub destination_country: String,
    pub number_of_days:      u32,
    pub board_type_name:     String,
    pub first_date:          Option<NaiveDate>,
    pub last_date:           Option<NaiveDate>,
    pub days:                Vec<DayPrice>,
    pub grand_total:         Price,
}

/// A summary together with its printable text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryExport {
    pub summary: BookingSummary,
    pub text:    String,
}

impl BookingSummary {
    pub fn build(state: &BookingState, reference: &ReferenceData) -> Self {
        let days = compute_daily_prices(
            &state.daily_selections,
            &state.destination_country,
            reference,
        );
        let grand_total = compute_grand_total(&days);
        let board_type_name = state
            .board_type
            .and_then(|b| reference.board_type_name(b))
            .unwrap_or_default()
            .to_string();
        let dates = state.travel_dates();

        Self {
            citizenship: state.citizenship.clone(),
            destination_country: state.destination_country.clone(),
            number_of_days: state.number_of_days,
            board_type_name,
            first_date: dates.map(|(first, _)| first),
            last_date: dates.map(|(_, last)| last),
            days,
            grand_total,
        }
    }

    /// Plain-text rendition for printing or saving.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "=== BOOKING SUMMARY ===")?;
        writeln!(out, "  citizenship:  {}", self.citizenship)?;
        writeln!(out, "  destination:  {}", self.destination_country)?;
        writeln!(out, "  duration:     {} days", self.number_of_days)?;
        writeln!(out, "  board type:   {}", self.board_type_name)?;
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => writeln!(out, "  travel dates: {first} - {last}")?,
            _ => writeln!(out, "  travel dates: -")?,
        }
        writeln!(out)?;
        writeln!(out, "=== DAILY BREAKDOWN ===")?;
        for (i, day) in self.days.iter().enumerate() {
            writeln!(
                out,
                "  Day {:>2} {} | {} ${} | Lunch: {} {} | Dinner: {} {} | Day total: ${}",
                i + 1,
                day.date,
                day.hotel_name,
                day.hotel_price,
                day.lunch_name,
                meal_price(day.lunch_price),
                day.dinner_name,
                meal_price(day.dinner_price),
                day.day_total,
            )?;
        }
        writeln!(out)?;
        writeln!(out, "  GRAND TOTAL: ${}", self.grand_total)
    }
}

fn meal_price(price: Price) -> String {
    if price > 0 {
        format!("${price}")
    } else {
        "-".to_string()
    }
}
