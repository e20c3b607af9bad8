mod common;

use clap::Parser;
use common::temp_config;
use tickdown::cli::Cli;
use tickdown::config::DemoVariant;

#[test]
fn flags_override_file_values() {
    let (_dir, path) = temp_config("[timer]\nstart_time = 30\nduration_ms = 250\n");
    let path_arg = path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["tickdown", "--config", &path_arg, "--duration", "100"]);

    let config = cli.load_config().unwrap();
    assert_eq!(config.timer.start_time, 30);
    assert_eq!(config.timer.duration_ms, 100);
}

#[test]
fn variant_flag_selects_store_style() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path_arg = temp_dir.path().join("none.toml").to_string_lossy().to_string();
    let cli = Cli::parse_from(["tickdown", "--config", &path_arg, "--variant", "store"]);
    assert_eq!(cli.load_config().unwrap().ui.variant, DemoVariant::Store);
}

#[test]
fn invalid_override_is_rejected() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path_arg = temp_dir.path().join("none.toml").to_string_lossy().to_string();
    let cli = Cli::parse_from(["tickdown", "--config", &path_arg, "--duration", "0"]);
    assert!(cli.load_config().is_err());
}

#[test]
fn log_file_flag_sets_logging_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path_arg = temp_dir.path().join("none.toml").to_string_lossy().to_string();
    let cli = Cli::parse_from([
        "tickdown",
        "--config",
        &path_arg,
        "--log-file",
        "/tmp/tickdown.log",
    ]);
    let config = cli.load_config().unwrap();
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/tickdown.log"))
    );
}

#[test]
fn unknown_variant_is_a_usage_error() {
    assert!(Cli::try_parse_from(["tickdown", "--variant", "hooks"]).is_err());
}
