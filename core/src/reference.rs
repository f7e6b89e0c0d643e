//! Read-only reference data: countries, board types, and the hotel and
//! meal catalogs of each destination.
//!
//! Catalogs are keyed by destination country name, the same value the
//! configuration form stores in `destination_country`.

use crate::{
    booking::BoardType,
    types::{CountryId, HotelId, MealId, Price},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id:   CountryId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardTypeInfo {
    pub code: BoardType,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotel {
    pub id:    HotelId,
    pub name:  String,
    pub price: Price,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    pub id:    MealId,
    pub name:  String,
    pub price: Price,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealOptions {
    #[serde(default)]
    pub lunch:  Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub countries:   Vec<Country>,
    pub board_types: Vec<BoardTypeInfo>,
    pub hotels:      HashMap<String, Vec<Hotel>>,
    pub meals:       HashMap<String, MealOptions>,
}

impl ReferenceData {
    pub fn has_country(&self, name: &str) -> bool {
        self.countries.iter().any(|c| c.name == name)
    }

    /// Hotels offered in `country`, in catalog order. Empty when unknown.
    pub fn hotels_for(&self, country: &str) -> &[Hotel] {
        self.hotels.get(country).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn meals_for(&self, country: &str) -> Option<&MealOptions> {
        self.meals.get(country)
    }

    pub fn find_hotel(&self, country: &str, id: HotelId) -> Option<&Hotel> {
        self.hotels_for(country).iter().find(|h| h.id == id)
    }

    pub fn find_lunch(&self, country: &str, id: MealId) -> Option<&Meal> {
        self.meals_for(country)?.lunch.iter().find(|m| m.id == id)
    }

    pub fn find_dinner(&self, country: &str, id: MealId) -> Option<&Meal> {
        self.meals_for(country)?.dinner.iter().find(|m| m.id == id)
    }

    pub fn board_type_name(&self, code: BoardType) -> Option<&str> {
        self.board_types
            .iter()
            .find(|b| b.code == code)
            .map(|b| b.name.as_str())
    }

    /// Hardcoded catalog for tests and for running without a data dir.
    pub fn builtin() -> Self {
        let countries = [
            "Turkey",
            "United Arab Emirates",
            "Italy",
            "Spain",
            "Egypt",
            "Germany",
            "United Kingdom",
        ]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| Country { id, name: name.into() })
            .collect();

        let board_types = vec![
            BoardTypeInfo { code: BoardType::FullBoard, name: "Full Board".into() },
            BoardTypeInfo { code: BoardType::HalfBoard, name: "Half Board".into() },
            BoardTypeInfo { code: BoardType::NoBoard,   name: "No Board".into() },
        ];

        let mut hotels = HashMap::new();
        hotels.insert(
            "Turkey".to_string(),
            vec![
                hotel(1, "Hilton Istanbul", 120),
                hotel(2, "Rixos Antalya", 150),
                hotel(3, "Swissotel Ankara", 90),
            ],
        );
        hotels.insert(
            "United Arab Emirates".to_string(),
            vec![
                hotel(4, "Burj Al Arab", 500),
                hotel(5, "Atlantis The Palm", 350),
                hotel(6, "Jumeirah Beach Hotel", 280),
            ],
        );
        hotels.insert(
            "Italy".to_string(),
            vec![
                hotel(7, "Hotel Danieli Venice", 300),
                hotel(8, "Hotel Hassler Roma", 320),
                hotel(9, "Grand Hotel Tremezzo", 400),
            ],
        );
        hotels.insert(
            "Spain".to_string(),
            vec![
                hotel(10, "Hotel Arts Barcelona", 250),
                hotel(11, "Ritz Madrid", 380),
            ],
        );

        let mut meals = HashMap::new();
        meals.insert(
            "Turkey".to_string(),
            MealOptions {
                lunch:  vec![meal(1, "Turkish Kebab Lunch", 25), meal(2, "Meze Platter", 20)],
                dinner: vec![meal(3, "Ottoman Feast", 40), meal(4, "Seafood Dinner", 45)],
            },
        );
        meals.insert(
            "United Arab Emirates".to_string(),
            MealOptions {
                lunch:  vec![meal(5, "Arabic Mixed Grill", 35), meal(6, "Shawarma Plate", 20)],
                dinner: vec![meal(7, "Desert Safari Dinner", 80), meal(8, "Lamb Ouzi", 60)],
            },
        );
        meals.insert(
            "Italy".to_string(),
            MealOptions {
                lunch:  vec![meal(9, "Pasta Carbonara", 22), meal(10, "Margherita Pizza", 18)],
                dinner: vec![meal(11, "Osso Buco", 45), meal(12, "Risotto ai Funghi", 38)],
            },
        );
        meals.insert(
            "Spain".to_string(),
            MealOptions {
                lunch:  vec![meal(13, "Paella Valenciana", 28)],
                dinner: vec![meal(14, "Tapas Tasting", 42)],
            },
        );

        Self { countries, board_types, hotels, meals }
    }
}

fn hotel(id: HotelId, name: &str, price: Price) -> Hotel {
    Hotel { id, name: name.into(), price }
}

fn meal(id: MealId, name: &str, price: Price) -> Meal {
    Meal { id, name: name.into(), price }
}
