//! Configuration loading across global, workspace and environment sources

use crate::integration::test_utils::with_isolated_env;
use liftplan::config::{global_config_path, ConfigLoader};
use liftplan::types::Unit;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let config = with_isolated_env(&test_dir, || ConfigLoader::load(workspace.path())).unwrap();

    assert_eq!(config, ConfigLoader::defaults());
}

#[cfg(target_os = "linux")]
#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join("liftplan.toml"),
        "[compiler]\nid_length = 12\n",
    )
    .unwrap();

    let config = with_isolated_env(&test_dir, || {
        let global = global_config_path().unwrap();
        assert!(global.starts_with(test_dir.path()));
        std::fs::create_dir_all(global.parent().unwrap()).unwrap();
        std::fs::write(
            &global,
            "[compiler]\nunit = \"kg\"\nid_length = 4\n\n[logging]\nlevel = \"info\"\n",
        )
        .unwrap();
        ConfigLoader::load(workspace.path())
    })
    .unwrap();

    assert_eq!(config.compiler.unit, Unit::Kg, "global value survives");
    assert_eq!(config.compiler.id_length, 12, "workspace value wins");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_environment_variable_wins() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join("liftplan.toml"),
        "[compiler]\nunit = \"kg\"\n",
    )
    .unwrap();

    let config = with_isolated_env(&test_dir, || {
        std::env::set_var("LIFTPLAN__COMPILER__UNIT", "lb");
        std::env::set_var("LIFTPLAN__COMPILER__ID_LENGTH", "16");
        ConfigLoader::load(workspace.path())
    })
    .unwrap();

    assert_eq!(config.compiler.unit, Unit::Lb);
    assert_eq!(config.compiler.id_length, 16);
}

#[test]
fn test_invalid_workspace_value_is_a_config_error() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join("liftplan.toml"),
        "[compiler]\nunit = \"stone\"\n",
    )
    .unwrap();

    let result = with_isolated_env(&test_dir, || ConfigLoader::load(workspace.path()));
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
