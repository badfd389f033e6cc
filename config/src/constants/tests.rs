//! Tests for the print settings snapshot.

use super::*;

#[test]
fn default_settings_are_valid() {
    let settings = PrintSettings::default();
    assert!(settings.layer_height > 0.0);
    assert!(settings.resolution >= MIN_RESOLUTION);
    assert_eq!(PrintSettings::new(LAYER_HEIGHT, CIRCLE_RESOLUTION), Ok(settings));
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        PrintSettings::new(-0.1, 16).unwrap_err(),
        ConfigError::InvalidLayerHeight(-0.1)
    );
    assert!(matches!(
        PrintSettings::new(f64::NAN, 16),
        Err(ConfigError::InvalidLayerHeight(_))
    ));
    assert_eq!(
        PrintSettings::new(0.2, 2).unwrap_err(),
        ConfigError::InvalidResolution(2)
    );
}

#[test]
fn zero_layer_height_disables_correction() {
    let settings = PrintSettings::new(0.0, 16).unwrap();
    assert_eq!(settings.hole_correction(), 0.0);
}

#[test]
fn error_messages_name_the_setting() {
    let err = ConfigError::InvalidResolution(2);
    assert!(err.to_string().contains("resolution"));
    let err = ConfigError::InvalidLayerHeight(-1.0);
    assert!(err.to_string().contains("layer_height"));
}
