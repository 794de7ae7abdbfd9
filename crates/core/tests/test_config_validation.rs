use hexa::{Hexagon, HexagonConfig};
use validator::ValidationErrors;

#[test]
fn test_hexagon_config_validation() {
    let config = HexagonConfig {
        size: -0.5, // invalid
        flat: true, // valid
    };

    // This is a bit of a lazy check but it works well enough
    let err = Hexagon::from_config(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["size"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_hexagon_config_round_trip() {
    let config = HexagonConfig {
        size: 3.0,
        flat: false,
    };
    let hexagon = Hexagon::try_from(config).unwrap();
    assert_eq!(hexagon.config(), config);
    assert_eq!(HexagonConfig::from(hexagon), config);
}

#[cfg(feature = "json")]
#[test]
fn test_hexagon_config_json() {
    let config = HexagonConfig::from_json(r#"{"size": 2.0}"#).unwrap();
    assert_eq!(
        config,
        HexagonConfig {
            size: 2.0,
            flat: false
        }
    );
    assert!(HexagonConfig::from_json("[1, 2]").is_err());

    let json = config.to_json().unwrap();
    let config = HexagonConfig::from_json(&json).unwrap();
    assert_eq!(config.size, 2.0);

    // Deserializing a hexagon directly validates its config
    assert!(serde_json::from_str::<Hexagon>(r#"{"size": 0.0}"#).is_err());
    let hexagon: Hexagon =
        serde_json::from_str(r#"{"size": 1.5, "flat": true}"#).unwrap();
    assert_eq!(hexagon, Hexagon::new(1.5, true).unwrap());
}
