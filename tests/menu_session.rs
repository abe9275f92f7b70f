//! End-to-end menu runs against real files in a temp directory.

use caesar_core::config::AppConfig;
use caesar_core::menu::Session;
use caesar_core::{decrypt, encrypt};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn plain_config() -> AppConfig {
    AppConfig {
        color: false,
        ..AppConfig::default()
    }
}

fn run_with(config: AppConfig, lines: &[&str]) -> String {
    let script = lines.iter().map(|line| format!("{line}\n")).collect::<String>();
    let mut session = Session::new(Cursor::new(script.into_bytes()), Vec::new(), config);
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn encrypt_then_decrypt_through_the_menu() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let back = dir.path().join("back.txt");
    fs::write(&plain, "Hello, World!\nСъешь ещё булок\n").unwrap();

    let output = run_with(
        plain_config(),
        &[
            "1", path_str(&plain), path_str(&cipher), "3",
            "2", path_str(&cipher), path_str(&back), "3",
            "5",
        ],
    );

    assert_eq!(output.matches("Operation completed successfully").count(), 2);
    assert_eq!(
        fs::read_to_string(&cipher).unwrap(),
        format!("{}\n{}\n", encrypt("Hello, World!", 3), encrypt("Съешь ещё булок", 3))
    );
    assert_eq!(fs::read_to_string(&back).unwrap(), "Hello, World!\nСъешь ещё булок\n");
}

#[test]
fn brute_force_writes_a_report_with_every_key() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("secret.txt");
    let report = dir.path().join("report.txt");
    fs::write(&input, "Khoor\nЁ\n").unwrap();

    let output = run_with(plain_config(), &["3", path_str(&input), path_str(&report), "5"]);
    assert!(output.contains("Brute force finished. Check the output file."));

    let report = fs::read_to_string(&report).unwrap();
    assert_eq!(report.matches("Key ").count(), 32);
    assert!(report.starts_with(&format!("Key 1:\n{}\n\n", decrypt("Khoor\nЁ\n", 1))));
    assert!(report.contains("Key 3:\nHello\nГ\n\n\n"));
    assert!(report.ends_with(&format!("Key 32:\n{}\n\n", decrypt("Khoor\nЁ\n", 32))));
}

#[test]
fn frequency_analysis_prints_key_and_text() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("secret.txt");
    let line = "Он шёл по дороге, а потом долго смотрел на облака.";
    fs::write(&input, format!("{}\n", encrypt(line, 9)).repeat(10)).unwrap();

    let output = run_with(plain_config(), &["4", path_str(&input), "5"]);
    assert!(output.contains("Guessed key: 9"));
    assert!(output.contains(&format!("Decrypted text:\n{}\n", line.repeat(10))));
}

#[test]
fn frequency_analysis_uses_configured_table() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.json");
    let input = dir.path().join("secret.txt");
    fs::write(&table, r#"{"e": 0.9, "t": 0.1}"#).unwrap();
    fs::write(&input, encrypt("tee eee see", 5)).unwrap();

    let config = AppConfig {
        frequency_table: Some(table),
        ..plain_config()
    };
    let output = run_with(config, &["4", path_str(&input), "5"]);
    assert!(output.contains("Guessed key: 5"));
    assert!(output.contains("tee eee see"));
}

#[test]
fn failures_are_reported_and_the_menu_continues() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let existing = dir.path().join("existing.txt");
    let out = dir.path().join("out.txt");
    fs::write(&existing, "abc").unwrap();

    let output = run_with(
        plain_config(),
        &[
            "1", path_str(&missing), path_str(&out), "1",
            "2", path_str(&existing), path_str(&out), "one",
            "5",
        ],
    );

    assert_eq!(output.matches("Error: ").count(), 2);
    assert!(output.contains("Error: invalid key 'one': expected an integer"));
    assert!(output.contains("Exiting..."));
    assert!(!out.exists());
}

#[test]
fn colored_output_still_carries_the_messages() {
    let output = run_with(AppConfig::default(), &["x", "5"]);
    assert!(output.contains("enter a number from 1 to 5"));
    assert!(output.contains("Exiting..."));
    assert!(output.contains('\u{1b}'));
}
