//! Price aggregation. Joins daily selections against the destination's
//! catalogs to produce a per-day breakdown and a grand total.
//!
//! Pure functions: output depends only on the inputs.

use crate::{
    booking::DailySelection,
    reference::ReferenceData,
    types::Price,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NO_HOTEL_LABEL: &str = "No hotel selected";
pub const NO_MEAL_LABEL: &str = "-";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPrice {
    pub date:         NaiveDate,
    pub hotel_name:   String,
    pub hotel_price:  Price,
    pub lunch_name:   String,
    pub lunch_price:  Price,
    pub dinner_name:  String,
    pub dinner_price: Price,
    pub day_total:    Price,
}

/// Price every day of the trip. Absent or unresolvable references cost 0
/// and carry a placeholder name; they are never an error.
pub fn compute_daily_prices(
    selections: &[DailySelection],
    destination_country: &str,
    reference: &ReferenceData,
) -> Vec<DayPrice> {
    selections
        .iter()
        .map(|day| {
            let hotel = day
                .hotel_id
                .and_then(|id| reference.find_hotel(destination_country, id));
            let lunch = day
                .lunch_id
                .and_then(|id| reference.find_lunch(destination_country, id));
            let dinner = day
                .dinner_id
                .and_then(|id| reference.find_dinner(destination_country, id));

            let (hotel_name, hotel_price) = resolved(hotel.map(|h| (&h.name, h.price)), NO_HOTEL_LABEL);
            let (lunch_name, lunch_price) = resolved(lunch.map(|m| (&m.name, m.price)), NO_MEAL_LABEL);
            let (dinner_name, dinner_price) = resolved(dinner.map(|m| (&m.name, m.price)), NO_MEAL_LABEL);

            DayPrice {
                date: day.date,
                hotel_name,
                hotel_price,
                lunch_name,
                lunch_price,
                dinner_name,
                dinner_price,
                day_total: hotel_price.saturating_add(lunch_price).saturating_add(dinner_price),
            }
        })
        .collect()
}

/// Totals saturate at `Price::MAX` rather than wrap.
pub fn compute_grand_total(day_prices: &[DayPrice]) -> Price {
    day_prices.iter().fold(0, |total, d| total.saturating_add(d.day_total))
}

fn resolved(entry: Option<(&String, Price)>, placeholder: &str) -> (String, Price) {
    match entry {
        Some((name, price)) => (name.clone(), price),
        None => (placeholder.to_string(), 0),
    }
}
