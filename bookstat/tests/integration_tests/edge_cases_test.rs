// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, setup_library};
use anyhow::Result;
use bookstat::{AnalyzerError, analyze_book};
use std::fs;

#[test]
fn test_directory_with_book_name_is_rejected() -> Result<()> {
    let (_temp_dir, config) = setup_library()?;
    fs::create_dir(config.source_dir.join("shelf.txt"))?;

    let result = analyze_book(&config, "shelf", &mut Vec::new());

    assert!(matches!(result, Err(AnalyzerError::MissingBook { .. })));
    assert!(!config.output_dir.join("shelf_statistic.txt").exists());
    Ok(())
}

#[test]
fn test_unwritable_output_keeps_console_silent() -> Result<()> {
    let (temp_dir, mut config) = setup_library()?;
    config.output_dir = temp_dir.path().join("does_not_exist");
    let mut console = Vec::new();

    let err = analyze_book(&config, "scenario", &mut console)
        .expect_err("Writing into a missing directory should fail");

    assert!(matches!(err, AnalyzerError::OutputIo { .. }));
    assert!(err.to_string().starts_with("Error writing to file: "));
    assert!(console.is_empty(), "Summary is only printed after the report");
    Ok(())
}

#[test]
fn test_punctuation_only_book() -> Result<()> {
    let (_temp_dir, config) = setup_library()?;
    create_test_file(&config.source_dir, "marks.txt", "... !!! ?? -- a an 12345 to\n")?;

    let summary = analyze_book(&config, "marks", &mut Vec::new())?;

    assert_eq!(summary.unique_words, 0);
    assert_eq!(fs::read_to_string(&summary.report_path)?, "Total words: 0\n");
    Ok(())
}

#[test]
fn test_title_with_spaces() -> Result<()> {
    let (_temp_dir, config) = setup_library()?;
    create_test_file(
        &config.source_dir,
        "Pride and Prejudice.txt",
        "It is a truth universally acknowledged",
    )?;

    let summary = analyze_book(&config, "Pride and Prejudice", &mut Vec::new())?;

    assert_eq!(
        summary.report_path,
        config.output_dir.join("Pride and Prejudice_statistic.txt")
    );
    assert!(summary.report_path.is_file());
    assert_eq!(summary.unique_words, 3);
    Ok(())
}

#[test]
fn test_custom_extension() -> Result<()> {
    let (_temp_dir, mut config) = setup_library()?;
    config.extension = String::from(".md");
    create_test_file(&config.source_dir, "notes.md", "# Notes\nSome markdown notes here")?;

    let summary = analyze_book(&config, "notes", &mut Vec::new())?;

    assert_eq!(summary.top_words, vec!["notes", "here", "markdown", "some"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_book_writes_no_report() -> Result<()> {
    use std::os::unix::fs::PermissionsExt as _;

    let (_temp_dir, config) = setup_library()?;
    let book = config.source_dir.join("locked.txt");
    create_test_file(&config.source_dir, "locked.txt", "secret words inside")?;
    fs::set_permissions(&book, fs::Permissions::from_mode(0o000))?;

    // Privileged users can still open the file, so there is nothing to check.
    if fs::File::open(&book).is_ok() {
        return Ok(());
    }

    let mut console = Vec::new();
    let err = analyze_book(&config, "locked", &mut console)
        .expect_err("An unreadable book should stop the run");

    assert!(matches!(err, AnalyzerError::InputIo { .. }));
    assert!(err.to_string().contains("locked.txt"), "Message names the path");
    assert!(!config.output_dir.join("locked_statistic.txt").exists());
    assert!(console.is_empty());

    fs::set_permissions(&book, fs::Permissions::from_mode(0o644))?;
    Ok(())
}
