//! Build script for eddie-host
//!
//! Validates the embedded eddie.toml at compile time

use std::fs;
use std::path::Path;

/// Sections the runtime expects in the default configuration
const REQUIRED_SECTIONS: [&str; 4] = ["serial", "pins", "controller", "greeting"];

fn main() {
    println!("cargo:rerun-if-changed=eddie.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("eddie.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Failed to read eddie.toml                                ║\n\
            ║                                                                  ║\n\
            ║  Error: {:<56} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            e
        ),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid TOML syntax in eddie.toml                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        ),
    };

    let mut errors: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !matches!(config.get(**section), Some(toml::Value::Table(_))))
        .map(|section| format!("Missing [{}] section", section))
        .collect();

    if let Some(toml::Value::Array(color)) = config.get("greeting").and_then(|g| g.get("color")) {
        let valid = color.len() == 3
            && color
                .iter()
                .all(|c| matches!(c, toml::Value::Integer(v) if (0..=255).contains(v)));
        if !valid {
            errors.push("[greeting] color must be three values 0-255".to_string());
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid eddie.toml                                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated: String = line.chars().take(64).collect();
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
