//! List serial devices the board may be attached to
//!
//! ```bash
//! eddie-devices
//! eddie-devices --pattern '/dev/ttyS*'
//! ```

use std::process::ExitCode;

use clap::Parser;

#[cfg(target_os = "macos")]
const DEFAULT_PATTERNS: &[&str] = &["/dev/cu.usbserial-*", "/dev/cu.usbmodem*"];

#[cfg(not(target_os = "macos"))]
const DEFAULT_PATTERNS: &[&str] = &["/dev/ttyUSB*", "/dev/ttyACM*"];

/// Find USB serial devices
#[derive(Parser, Debug)]
#[command(name = "eddie-devices")]
#[command(version)]
struct Args {
    /// Device path glob, e.g. `/dev/tty[AU]*` (repeatable)
    #[arg(short, long)]
    pattern: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let patterns: Vec<&str> = if args.pattern.is_empty() {
        DEFAULT_PATTERNS.to_vec()
    } else {
        args.pattern.iter().map(String::as_str).collect()
    };

    let mut devices = Vec::new();
    for pattern in &patterns {
        match find_devices(pattern) {
            Ok(found) => devices.extend(found),
            Err(e) => eprintln!("bad pattern {:?}: {}", pattern, e),
        }
    }
    devices.sort();
    devices.dedup();

    if devices.is_empty() {
        println!("No usb devices found");
        return ExitCode::FAILURE;
    }

    println!("Try connecting to one of the following devices (and press enter once connected):");
    for device in &devices {
        println!("\tscreen -L {} –L", device);
    }
    ExitCode::SUCCESS
}

/// Paths matching the glob `pattern`; unreadable entries are skipped
fn find_devices(pattern: &str) -> Result<Vec<String>, glob::PatternError> {
    let mut found = Vec::new();
    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) => found.push(path.display().to_string()),
            Err(e) => eprintln!("cannot read {}: {}", e.path().display(), e.error()),
        }
    }
    Ok(found)
}
