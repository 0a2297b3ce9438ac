// tests/integration_tests/config_test.rs
use super::common::create_test_file;
use anyhow::Result;
use bookstat::config::{CONFIG_FILE_NAME, find_config_file, load_config};
use bookstat::{AnalyzerError, analyze_book};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_the_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    create_test_file(root, "library/poem.txt", "rose rose rose violet violet blue")?;
    fs::create_dir_all(root.join("out"))?;
    create_test_file(
        root,
        CONFIG_FILE_NAME,
        &format!(
            "source_dir = {:?}\noutput_dir = {:?}\ntop = 1\n",
            root.join("library"),
            root.join("out")
        ),
    )?;

    let config = load_config(None, root)?;
    let summary = analyze_book(&config, "poem", &mut Vec::new())?;

    assert_eq!(summary.top_words, vec!["rose"]);
    assert_eq!(summary.report_path, root.join("out").join("poem_statistic.txt"));
    assert!(summary.report_path.is_file());
    Ok(())
}

#[test]
fn test_nested_directory_finds_parent_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), CONFIG_FILE_NAME, "top = 2\n")?;
    let nested = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&nested)?;

    assert_eq!(
        find_config_file(&nested),
        Some(temp_dir.path().join(CONFIG_FILE_NAME))
    );
    assert_eq!(load_config(None, &nested)?.top, 2);
    Ok(())
}

#[test]
fn test_unknown_key_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), CONFIG_FILE_NAME, "topp = 2\n")?;

    let err = load_config(None, temp_dir.path()).expect_err("Unknown keys are rejected");
    assert!(matches!(err, AnalyzerError::ConfigParse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
    Ok(())
}

#[test]
fn test_explicit_config_skips_search() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), CONFIG_FILE_NAME, "top = 2\n")?;
    create_test_file(temp_dir.path(), "other.toml", "source_dir = \"elsewhere\"\n")?;

    let config = load_config(Some(&temp_dir.path().join("other.toml")), temp_dir.path())?;
    assert_eq!(config.source_dir, PathBuf::from("elsewhere"));
    assert_eq!(config.top, 10, "The discovered file is not merged in");
    Ok(())
}
