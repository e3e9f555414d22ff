/*!
 * Tests for application configuration functionality
 */

use docsrt::app_config::{Config, DocumentConfig, LogLevel, SubtitleConfig};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.subtitle.base_duration_secs, 10);
    assert_eq!(config.subtitle.short_duration_secs, 5);
    assert_eq!(config.subtitle.short_word_threshold, 8);
    assert_eq!(config.subtitle.max_words, 22);
    assert_eq!(config.subtitle.flex_words, 0);
    assert_eq!(config.subtitle.max_words_per_line, 10);
    assert_eq!(config.subtitle.section_break_lines, 5);
    assert_eq!(config.document.skip_leading_paragraphs, 2);
    assert_eq!(config.document.heading_keyword, "PART");
    assert_eq!(config.stop_words.len(), 12);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.subtitle.max_words = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("max_words"));
    config.subtitle.max_words = 22;

    config.subtitle.max_words_per_line = 0;
    assert!(config.validate().is_err());
    config.subtitle.max_words_per_line = 10;

    config.subtitle.short_duration_secs = 0;
    assert!(config.validate().is_err());
    config.subtitle.short_duration_secs = 5;

    config.document.heading_keyword = "  ".to_string();
    assert!(config.validate().is_err());
    config.document.heading_keyword = "PART".to_string();

    assert!(config.validate().is_ok());
}

/// Test that a partial JSON file fills in defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldUseDefaults() {
    let json = r#"{"subtitle": {"max_words": 15}, "log_level": "debug"}"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.subtitle.max_words, 15);
    assert_eq!(config.subtitle.base_duration_secs, 10);
    assert_eq!(config.subtitle.max_words_per_line, 10);
    assert_eq!(config.document, DocumentConfig::default());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.stop_words().contains("the"));
}

/// Test that the config survives a JSON round trip
#[test]
fn test_config_serialize_withDefaults_shouldRoundTrip() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.subtitle, SubtitleConfig::default());
    assert_eq!(parsed.stop_words, config.stop_words);
}

/// Test custom stop words replace the default list
#[test]
fn test_config_stopWords_withCustomList_shouldOnlyContainThose() {
    let mut config = Config::default();
    config.stop_words = vec!["Und".to_string()];

    let stop_words = config.stop_words();
    assert!(stop_words.contains("und"));
    assert!(!stop_words.contains("the"));
}

/// Test log level mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
