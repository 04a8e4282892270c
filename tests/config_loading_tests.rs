// Config loading tests - testing AppConfig::load from disk
//
// Tests focused on file discovery, prompt-file resolution and validation
// errors surfaced through the public loader.

use kanji_mix::config::{AppConfig, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("kanji-mix.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

const PROVIDERS: &str = r#"
[primary]
id = "deepseek"
endpoint = "https://api.deepseek.com"
api_path = "/chat/completions"
model = "deepseek-chat"
api_key = "DEEPSEEK_API_KEY"

[secondary]
id = "openai"
endpoint = "https://api.openai.com"
model = "gpt-4o"
api_key = "${OPENAI_API_KEY}"
"#;

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/kanji-mix.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_full_config() {
    let dir = tempdir().expect("tempdir");
    let content = format!(
        r#"
system_prompt = "Keep kanji, drop kana."

[generation]
temperature = 0.5
max_tokens = 512
timeout_secs = 15

[rest_server]
bind = "0.0.0.0:9000"
{PROVIDERS}"#
    );
    let path = write_config(dir.path(), &content);

    let config = AppConfig::load(Some(&path)).expect("load");
    assert_eq!(config.system_prompt, "Keep kanji, drop kana.");
    assert_eq!(config.generation.temperature, 0.5);
    assert_eq!(config.generation.max_tokens, 512);
    assert_eq!(config.generation.timeout, Duration::from_secs(15));
    assert_eq!(config.rest_server.bind.to_string(), "0.0.0.0:9000");
    assert_eq!(config.primary.url(), "https://api.deepseek.com/chat/completions");

    let secondary = config.secondary.expect("secondary");
    assert_eq!(secondary.url(), "https://api.openai.com/v1/chat/completions");
    assert_eq!(secondary.api_key.as_deref(), Some("${OPENAI_API_KEY}"));
}

#[test]
fn reads_prompt_from_file() {
    let dir = tempdir().expect("tempdir");
    let prompt_path = dir.path().join("prompt.txt");
    fs::write(&prompt_path, "\n  Rewrite as kanji and English.  \n").expect("write prompt");
    let content = format!(
        "system_prompt_file = {:?}\n{PROVIDERS}",
        prompt_path.display().to_string()
    );
    let path = write_config(dir.path(), &content);

    let config = AppConfig::load(Some(&path)).expect("load");
    assert_eq!(config.system_prompt, "Rewrite as kanji and English.");
}

#[test]
fn inline_prompt_wins_over_file() {
    let dir = tempdir().expect("tempdir");
    let content = format!(
        "system_prompt = \"inline\"\nsystem_prompt_file = \"/missing/prompt.txt\"\n{PROVIDERS}"
    );
    let path = write_config(dir.path(), &content);

    let config = AppConfig::load(Some(&path)).expect("load");
    assert_eq!(config.system_prompt, "inline");
}

#[test]
fn rejects_out_of_range_temperature() {
    let dir = tempdir().expect("tempdir");
    let content = format!("[generation]\ntemperature = 1.5\n{PROVIDERS}");
    let path = write_config(dir.path(), &content);

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::InvalidTemperature { .. })));
}

#[test]
fn rejects_invalid_bind_address() {
    let dir = tempdir().expect("tempdir");
    let content = format!("[rest_server]\nbind = \"localhost\"\n{PROVIDERS}");
    let path = write_config(dir.path(), &content);

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::InvalidBind { .. })));
}

#[test]
fn rejects_provider_without_model() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[primary]
id = "deepseek"
endpoint = "https://api.deepseek.com"
"#,
    );

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::MissingModel { .. })));
}

#[test]
fn reports_toml_syntax_errors_with_path() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[primary\nid = ");

    match AppConfig::load(Some(&path)) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn bundled_sample_config_is_valid() {
    let config = AppConfig::load(Some(Path::new("config/kanji-mix.toml"))).expect("load sample");
    assert_eq!(config.primary.id, "deepseek");
    assert_eq!(
        config.secondary.as_ref().map(|s| s.id.as_str()),
        Some("openai")
    );
    assert!(!config.system_prompt.is_empty());
}
