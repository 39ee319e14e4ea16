use std::fs;

use blackjack_cli::config::{self, Overrides, ValueSource};
use serde_json::Value;
use serial_test::serial;

const VARS: &[&str] = &[
    "BLACKJACK_CONFIG",
    "BLACKJACK_SEED",
    "BLACKJACK_PLAYER",
    "BLACKJACK_HISTORY",
    "BLACKJACK_SHOW_HISTORY",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn run_cfg() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = blackjack_cli::run(["blackjack", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, stdout, stderr) = run_cfg();
    assert_eq!(code, 0, "stderr: {}", stderr);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["player_name"]["value"].as_str(), Some("Player"));
    assert_eq!(json["player_name"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["show_history"]["value"].as_bool(), Some(false));
}

#[test]
#[serial]
fn env_overrides_file_and_flags_override_env() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blackjack.toml");
    fs::write(&path, "player_name = \"Filey\"\nseed = 11\nshow_history = true\n").unwrap();
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", &path);
        std::env::set_var("BLACKJACK_SEED", "22");
    }

    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.player_name, "Filey");
    assert_eq!(resolved.sources.player_name, ValueSource::File);
    assert_eq!(resolved.config.seed, Some(22));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert!(resolved.config.show_history);

    let resolved = config::resolve(Overrides {
        seed: Some(33),
        ..Overrides::default()
    })
    .unwrap();
    assert_eq!(resolved.config.seed, Some(33));
    assert_eq!(resolved.sources.seed, ValueSource::Cli);
    assert_eq!(resolved.sources.player_name, ValueSource::File);
    clear_env();
}

#[test]
#[serial]
fn invalid_env_seed_is_a_config_error() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_SEED", "not-a-number");
    }
    let (code, _, stderr) = run_cfg();
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid seed"));

    let mut err = Vec::new();
    let code = blackjack_cli::run(["blackjack", "sim", "--rounds", "1"], &mut Vec::new(), &mut err);
    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("Configuration error"));
    clear_env();
}

#[test]
#[serial]
fn malformed_file_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "seed = \"eleven\"\n").unwrap();
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", &path);
    }
    let (code, _, stderr) = run_cfg();
    assert_eq!(code, 2);
    assert!(stderr.contains("malformed config file"));
    clear_env();
}

#[test]
#[serial]
fn env_player_reaches_the_game() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_PLAYER", "Envy");
    }
    let mut out = Vec::new();
    let code = blackjack_cli::run(
        ["blackjack", "sim", "--rounds", "2", "--seed", "5"],
        &mut out,
        &mut Vec::new(),
    );
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("sim: player=Envy"));
    clear_env();
}
