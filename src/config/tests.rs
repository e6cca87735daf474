//! Configuration tests
//!
//! Guard the TOML format against drift: every field written by `to_toml`
//! must parse back into the same `Config`.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML should parse: {e}\n{toml_str}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed, config);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        theme: "Nord".to_string(),
        use_theme_background: false,
        history_capacity: 12,
        thousands_separator: " ".to_string(),
        mouse: false,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/tmp/abacus-logs"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "calc".to_string(),
        },
    };

    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed, config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::resolve(parse(""), no_env);
    assert_eq!(config, Config::default());
    assert_eq!(config.history_capacity, 8);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "Nord"
history_capacity = 4
mouse = true
"#,
    );
    let env = env_from(&[
        ("ABACUS_THEME", "Gruvbox Dark"),
        ("ABACUS_HISTORY_CAPACITY", "16"),
        ("ABACUS_NO_MOUSE", "1"),
    ]);

    let config = Config::resolve(file, env);
    assert_eq!(config.theme, "Gruvbox Dark");
    assert_eq!(config.history_capacity, 16);
    assert!(!config.mouse);
}

#[test]
fn test_invalid_env_capacity_falls_back_to_file() {
    let file = parse("history_capacity = 5");
    let env = env_from(&[("ABACUS_HISTORY_CAPACITY", "lots")]);
    assert_eq!(Config::resolve(file, env).history_capacity, 5);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let config = Config::resolve(parse("history_capacity = 0"), no_env);
    assert_eq!(config.history_capacity, 1);
}

#[test]
fn test_partial_logging_section() {
    let file = parse(
        r#"
[logging]
level = "trace"
file_rotation = "weekly"
"#,
    );
    let config = Config::resolve(file, no_env);
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_number_format_uses_separator() {
    let config = Config::resolve(parse(r#"thousands_separator = ".""#), no_env);
    assert_eq!(config.number_format().thousands_separator, ".");
}

#[test]
fn test_capacity_is_capped() {
    let config = Config::resolve(parse("history_capacity = 1000000"), no_env);
    assert_eq!(config.history_capacity, MAX_HISTORY_CAPACITY);

    let env = env_from(&[("ABACUS_HISTORY_CAPACITY", "18446744073709551615")]);
    assert_eq!(
        Config::resolve(parse(""), env).history_capacity,
        MAX_HISTORY_CAPACITY
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Escaping tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_strings_needing_escapes() {
    for separator in ["\"", "\\", "'", "'\"\\"] {
        let config = Config {
            thousands_separator: separator.to_string(),
            logging: LoggingConfig {
                file_dir: PathBuf::from(r"C:\logs\abacus"),
                file_prefix: r#"calc "daily""#.to_string(),
                ..LoggingConfig::default()
            },
            ..Config::default()
        };

        let parsed = Config::resolve(parse(&config.to_toml()), no_env);
        assert_eq!(parsed, config, "separator {separator:?}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Saving tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_saved_theme_ignores_env_overrides() {
    let file = parse(
        r#"
theme = "Nord"
history_capacity = 5
"#,
    );
    let env = env_from(&[("ABACUS_NO_MOUSE", "1"), ("ABACUS_HISTORY_CAPACITY", "3")]);
    let running = Config::resolve(file.clone(), env);
    assert!(!running.mouse);
    assert_eq!(running.history_capacity, 3);

    let saved = Config::with_saved_theme(file, "Gruvbox Dark");
    assert_eq!(saved.theme, "Gruvbox Dark");
    assert!(saved.mouse);
    assert_eq!(saved.history_capacity, 5);

    let written = saved.to_toml();
    assert!(written.contains("mouse = true"));
    assert!(written.contains("history_capacity = 5"));
    assert!(written.contains(r#"theme = "Gruvbox Dark""#));
}
