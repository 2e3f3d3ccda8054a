//! Tests for types

use super::*;
use proptest::prelude::*;

#[test]
fn test_display_config_default() {
    let config = DisplayConfig::default();
    assert_eq!(config.intent_poll_interval_ms, 100);
    assert_eq!(config.intent_sensitivity, 7);
    assert_eq!(config.close_delay_ms, 100);
}

#[test]
fn test_display_config_options_match_defaults() {
    assert_eq!(DisplayConfig::default().options(), DisplayOptions::default());
}

#[test]
fn test_display_config_options_convert_millis() {
    let config = DisplayConfig {
        intent_poll_interval_ms: 250,
        intent_sensitivity: 3,
        close_delay_ms: 0,
    };
    let options = config.options();
    assert_eq!(options.intent_poll_interval, Duration::from_millis(250));
    assert_eq!(options.intent_sensitivity, 3);
    assert_eq!(options.close_delay, Duration::ZERO);
}

#[test]
fn test_tooltip_config_default() {
    let config = TooltipConfig::default();
    assert_eq!(config.placement, Placement::N);
    assert_eq!(config.offset, 1);
    assert_eq!(config.max_width, 40);
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[display]
intent_poll_interval_ms = 50
intent_sensitivity = 3
close_delay_ms = 400

[tooltip]
placement = "se"
offset = 0
max_width = 60
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.display.intent_poll_interval_ms, 50);
    assert_eq!(config.display.intent_sensitivity, 3);
    assert_eq!(config.display.close_delay_ms, 400);
    assert_eq!(config.tooltip.placement, Placement::Se);
    assert_eq!(config.tooltip.offset, 0);
    assert_eq!(config.tooltip.max_width, 60);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_display_section_keeps_other_defaults() {
    let toml = r#"
[display]
close_delay_ms = 500
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.display.close_delay_ms, 500);
    assert_eq!(config.display.intent_poll_interval_ms, 100);
    assert_eq!(config.display.intent_sensitivity, 7);
    assert_eq!(config.tooltip, TooltipConfig::default());
}

#[test]
fn test_negative_delay_is_rejected() {
    let toml = r#"
[display]
close_delay_ms = -5
"#;
    assert!(toml::from_str::<Config>(toml).is_err());
}

#[test]
fn test_config_serializes_back_to_same_values() {
    let mut config = Config::default();
    config.tooltip.placement = Placement::W;
    config.display.intent_sensitivity = 12;

    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("placement = \"w\""));
    assert!(text.contains("intent_sensitivity = 12"));

    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

// Feature: config-system, Property: Valid placement parsing
// Any of the eight placement names parses into the matching variant.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_valid_placement_parsing(
        placement in prop::sample::select(vec!["n", "e", "s", "w", "nw", "ne", "sw", "se"])
    ) {
        let toml_content = format!(r#"
[tooltip]
placement = "{}"
"#, placement);

        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse valid placement: {}", placement);

        let expected = match placement {
            "n" => Placement::N,
            "e" => Placement::E,
            "s" => Placement::S,
            "w" => Placement::W,
            "nw" => Placement::Nw,
            "ne" => Placement::Ne,
            "sw" => Placement::Sw,
            "se" => Placement::Se,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.unwrap().tooltip.placement, expected);
    }

    #[test]
    fn prop_display_values_parse_verbatim(
        poll in 0u64..10_000,
        sensitivity in 0u32..1_000,
        close in 0u64..10_000
    ) {
        let toml_content = format!(r#"
[display]
intent_poll_interval_ms = {}
intent_sensitivity = {}
close_delay_ms = {}
"#, poll, sensitivity, close);

        let config: Config = toml::from_str(&toml_content).unwrap();
        prop_assert_eq!(config.display.intent_poll_interval_ms, poll);
        prop_assert_eq!(config.display.intent_sensitivity, sensitivity);
        prop_assert_eq!(config.display.close_delay_ms, close);
    }
}

#[test]
fn test_empty_display_section_uses_controller_defaults() {
    let config: Config = toml::from_str("[display]\n").unwrap();

    assert_eq!(config.display.options(), DisplayOptions::default());
    assert_eq!(
        config.display.intent_sensitivity,
        crate::display::DEFAULT_INTENT_SENSITIVITY
    );
}
