/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use std::fs;

use crate::common;
use docsrt::app_config::Config;
use docsrt::app_controller::{Controller, FolderSummary, RunOutcome};

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.config().subtitle.max_words, 22);
    Ok(())
}

/// Invalid configuration is rejected up front
#[test]
fn test_controller_initialization_withZeroMaxWords_shouldFail() {
    let mut config = Config::default();
    config.subtitle.max_words = 0;

    let result = Controller::with_config(config);
    assert!(result.is_err());
}

/// Test converting one document into an output directory
#[test]
fn test_run_withJsonDocument_shouldWriteSrtNamedAfterInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_document(temp_dir.path(), "story.json")?;
    let output_dir = temp_dir.path().join("out");

    let controller = Controller::with_config(Config::default())?;
    let outcome = controller.run(input, output_dir.clone(), false)?;

    let expected = output_dir.join("story.srt");
    assert_eq!(outcome, RunOutcome::Converted(expected.clone()));

    let content = fs::read_to_string(&expected)?;
    assert!(content.starts_with("\n\n\n\n\n1\n00:00:00,000 --> 00:00:05,000\n"));
    assert!(content.contains("They left at dawn."));
    Ok(())
}

/// Existing output is kept unless overwriting is forced
#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_document(temp_dir.path(), "story.json")?;
    let existing = common::create_test_file(temp_dir.path(), "story.srt", "keep me")?;

    let controller = Controller::with_config(Config::default())?;

    let outcome = controller.run(input.clone(), temp_dir.path().to_path_buf(), false)?;
    assert_eq!(outcome, RunOutcome::Skipped(existing.clone()));
    assert_eq!(fs::read_to_string(&existing)?, "keep me");

    let outcome = controller.run(input, temp_dir.path().to_path_buf(), true)?;
    assert_eq!(outcome, RunOutcome::Converted(existing.clone()));
    assert_ne!(fs::read_to_string(&existing)?, "keep me");
    Ok(())
}

/// A missing input file is an error
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(
        temp_dir.path().join("nope.json"),
        temp_dir.path().to_path_buf(),
        false,
    );
    assert!(result.is_err());
    Ok(())
}

/// Malformed documents surface the reader error
#[test]
fn test_convertDocument_withUnknownKind_shouldReportParagraph() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "bad.json",
        r#"[{"kind": "normal", "text": "ok"}, {"kind": "caption", "text": "?"}]"#,
    )?;

    let controller = Controller::with_config(Config::default())?;
    let error = controller.convert_document(&input).unwrap_err();

    assert!(format!("{:#}", error).contains("Unknown paragraph kind 'caption'"));
    Ok(())
}

/// Test converting a folder of mixed documents
#[test]
fn test_runFolder_withMixedDocuments_shouldCountOutcomes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_document(temp_dir.path(), "one.json")?;
    common::create_test_file(
        temp_dir.path(),
        "two.txt",
        "Title\nAuthor\nPART I: START\nA line of prose.\n",
    )?;
    common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;
    common::create_test_file(temp_dir.path(), "notes.srt", "ignored")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run_folder(temp_dir.path().to_path_buf(), false)?;

    assert_eq!(
        summary,
        FolderSummary {
            converted: 2,
            skipped: 0,
            failed: 1
        }
    );
    assert!(temp_dir.path().join("one.srt").exists());
    assert!(temp_dir.path().join("two.srt").exists());
    assert!(!temp_dir.path().join("broken.srt").exists());

    let summary = controller.run_folder(temp_dir.path().to_path_buf(), false)?;
    assert_eq!(summary.skipped, 2);
    Ok(())
}

/// The active config file sitting next to documents is left alone
#[test]
fn test_runFolder_withConfigFileInFolder_shouldNotCountItAsFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_document(temp_dir.path(), "story.json")?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        &serde_json::to_string_pretty(&Config::default())?,
    )?;

    let controller = Controller::with_config(Config::default())?.with_config_file(&config_path);
    let summary = controller.run_folder(temp_dir.path().to_path_buf(), false)?;

    assert_eq!(
        summary,
        FolderSummary {
            converted: 1,
            skipped: 0,
            failed: 0
        }
    );
    assert!(!temp_dir.path().join("conf.srt").exists());
    Ok(())
}

/// A folder holding only the config file has nothing to convert
#[test]
fn test_runFolder_withOnlyConfigFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "conf.json", "{}")?;

    let controller = Controller::with_config(Config::default())?.with_config_file(config_path);
    assert!(controller.run_folder(temp_dir.path().to_path_buf(), false).is_err());
    Ok(())
}

/// A folder with nothing to convert is an error
#[test]
fn test_runFolder_withNoDocuments_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "video.mkv", "")?;

    let controller = Controller::with_config(Config::default())?;
    assert!(controller.run_folder(temp_dir.path().to_path_buf(), false).is_err());
    assert!(controller.run_folder(temp_dir.path().join("missing"), false).is_err());
    Ok(())
}
