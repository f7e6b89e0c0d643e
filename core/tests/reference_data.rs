use tripbook_core::{
    booking::BoardType,
    config::WizardConfig,
    reference::ReferenceData,
};

fn data_dir() -> String {
    format!("{}/../data", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn shipped_data_loads() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = WizardConfig::load(&data_dir()).expect("load data dir");

    assert!(config.reference.has_country("Turkey"));
    assert_eq!(config.reference.board_types.len(), 3);
    assert_eq!(config.settings.max_days, Some(30));
    assert!(!config.reference.hotels_for("Italy").is_empty());
}

#[test]
fn shipped_data_matches_builtin_catalog() {
    let loaded = WizardConfig::load(&data_dir()).expect("load data dir").reference;
    let builtin = ReferenceData::builtin();

    assert_eq!(loaded.countries, builtin.countries);
    assert_eq!(loaded.board_types, builtin.board_types);
    assert_eq!(loaded.hotels, builtin.hotels);
    assert_eq!(loaded.meals, builtin.meals);
}

#[test]
fn missing_data_dir_is_an_error() {
    let err = WizardConfig::load("/nonexistent/tripbook-data").unwrap_err();
    assert!(err.to_string().contains("Cannot read"), "{err}");
}

#[test]
fn lookups_are_scoped_by_country() {
    let reference = ReferenceData::builtin();

    assert_eq!(reference.find_hotel("Turkey", 1).map(|h| h.price), Some(120));
    assert!(reference.find_hotel("Italy", 1).is_none());
    assert_eq!(reference.find_lunch("Italy", 9).map(|m| m.name.as_str()), Some("Pasta Carbonara"));
    assert!(reference.find_dinner("Italy", 9).is_none());
}

#[test]
fn unknown_country_has_empty_catalogs() {
    let reference = ReferenceData::builtin();

    assert!(reference.hotels_for("Egypt").is_empty());
    assert!(reference.meals_for("Egypt").is_none());
    assert!(reference.find_lunch("Egypt", 1).is_none());
}

#[test]
fn board_type_names_resolve() {
    let reference = ReferenceData::builtin();

    assert_eq!(reference.board_type_name(BoardType::HalfBoard), Some("Half Board"));
    assert_eq!(ReferenceData::default().board_type_name(BoardType::HalfBoard), None);
}
