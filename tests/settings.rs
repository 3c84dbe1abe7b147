use std::path::PathBuf;
use std::sync::Mutex;

use stlreader::error::StlError;
use stlreader::settings::Settings;

// Settings::load reads the process environment, so tests here take turns.
static ENV: Mutex<()> = Mutex::new(());

fn config_file(test: &str, text: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("stlreader_settings_{}_{}", test, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("stlreader.toml"), text).unwrap();
    dir.join("stlreader")
}

#[test]
fn file_values_override_defaults() {
    let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
    let base = config_file(
        "file",
        r#"
content_dir = "/srv/content"
log_level = "debug"

[sources]
nav = "menu.stl"
tool_sources = ["Tool:CLI", "Tool:MCP"]
"#,
    );
    let settings = Settings::load(base.to_str().unwrap()).expect("settings");
    assert_eq!(settings.content_dir, PathBuf::from("/srv/content"));
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.listen, "127.0.0.1:4321");
    assert_eq!(settings.sources.nav, "menu.stl");
    assert_eq!(settings.sources.docs_nav, "docs-nav.stl");
    assert_eq!(settings.sources.tool_sources, vec!["Tool:CLI", "Tool:MCP"]);
    let _ = std::fs::remove_dir_all(base.parent().unwrap());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
    let base = std::env::temp_dir().join(format!("stlreader_settings_absent_{}", std::process::id()));
    let settings = Settings::load(base.to_str().unwrap()).expect("settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn environment_overrides_file() {
    let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
    let base = config_file("env", "listen = \"0.0.0.0:80\"\n[sources]\nnav = \"menu.stl\"\n");
    // SAFETY: every test touching the environment holds the ENV lock
    unsafe {
        std::env::set_var("STLREADER__LISTEN", "127.0.0.1:9000");
        std::env::set_var("STLREADER__SOURCES__NAV", "env-nav.stl");
    }
    let loaded = Settings::load(base.to_str().unwrap());
    unsafe {
        std::env::remove_var("STLREADER__LISTEN");
        std::env::remove_var("STLREADER__SOURCES__NAV");
    }
    let settings = loaded.expect("settings");
    assert_eq!(settings.listen, "127.0.0.1:9000");
    assert_eq!(settings.sources.nav, "env-nav.stl");
    assert_eq!(settings.sources.aso, "aso.stl");
    let _ = std::fs::remove_dir_all(base.parent().unwrap());
}

#[test]
fn malformed_file_is_a_config_error() {
    let _env = ENV.lock().unwrap_or_else(|e| e.into_inner());
    let base = config_file("malformed", "listen = [\"unterminated\"\n");
    let err = Settings::load(base.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, StlError::Config(_)), "{err}");
    let _ = std::fs::remove_dir_all(base.parent().unwrap());
}
