use crate::reference::{BoardTypeInfo, Country, Hotel, MealOptions, ReferenceData};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trip length cap of the booking form.
pub const DEFAULT_MAX_DAYS: u32 = 30;

/// Wizard behaviour knobs, loaded from `wizard.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WizardSettings {
    /// Upper bound on trip length enforced when leaving step 1.
    /// `None` leaves only the lower bound of one day.
    #[serde(default)]
    pub max_days: Option<u32>,
}

impl WizardSettings {
    /// Settings used when no `wizard.json` is supplied.
    pub fn builtin() -> Self {
        Self { max_days: Some(DEFAULT_MAX_DAYS) }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CountriesFile {
    countries: Vec<Country>,
}

#[derive(Debug, Clone, Deserialize)]
struct BoardTypesFile {
    board_types: Vec<BoardTypeInfo>,
}

#[derive(Debug, Clone, Deserialize)]
struct HotelsFile {
    hotels: HashMap<String, Vec<Hotel>>,
}

#[derive(Debug, Clone, Deserialize)]
struct MealsFile {
    meals: HashMap<String, MealOptions>,
}

#[derive(Debug, Clone, Default)]
pub struct WizardConfig {
    pub reference: ReferenceData,
    pub settings:  WizardSettings,
}

impl WizardConfig {
    /// Load from the data/ directory.
    /// In tests, use WizardConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let countries: CountriesFile = read_json(&format!("{data_dir}/reference/countries.json"))?;
        let board_types: BoardTypesFile =
            read_json(&format!("{data_dir}/reference/board_types.json"))?;
        let hotels: HotelsFile = read_json(&format!("{data_dir}/reference/hotels.json"))?;
        let meals: MealsFile = read_json(&format!("{data_dir}/reference/meals.json"))?;

        let reference = ReferenceData {
            countries:   countries.countries,
            board_types: board_types.board_types,
            hotels:      hotels.hotels,
            meals:       meals.meals,
        };

        for country in reference.hotels.keys().chain(reference.meals.keys()) {
            if !reference.has_country(country) {
                log::warn!("config: catalog entry for unlisted country '{country}'");
            }
        }

        let settings_path = format!("{data_dir}/wizard.json");
        let settings = if std::path::Path::new(&settings_path).exists() {
            read_json(&settings_path)?
        } else {
            log::debug!("config: {settings_path} not found, using builtin settings");
            WizardSettings::builtin()
        };

        log::info!(
            "config: loaded {} countries, {} hotel catalogs, {} meal catalogs from {data_dir}",
            reference.countries.len(),
            reference.hotels.len(),
            reference.meals.len()
        );

        Ok(Self { reference, settings })
    }

    /// Builtin catalog with the form's day cap. Used when no data dir is given.
    pub fn builtin() -> Self {
        Self {
            reference: ReferenceData::builtin(),
            settings:  WizardSettings::builtin(),
        }
    }

    /// Config with hardcoded defaults for use in unit tests. No day cap.
    pub fn default_test() -> Self {
        Self {
            reference: ReferenceData::builtin(),
            settings:  WizardSettings::default(),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
    serde_json::from_str(&content).map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))
}
