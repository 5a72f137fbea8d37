//! Eddie - Vocabulary Trainer
//!
//! Host binary driving a Grove RGB LCD, two buttons, a rotary sensor and
//! an LED on a StandardFirmata board. Shows a Spanish word, moves on when
//! the button is pressed, and brings back the words marked as missed.
//!
//! # Usage
//!
//! ```bash
//! # Embedded defaults, port from eddie.toml
//! eddie
//!
//! # Another port, reproducible word order
//! eddie --port /dev/ttyACM0 --seed 42
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use embassy_executor::Spawner;
use embassy_futures::select::{select4, Either4};
use embassy_time::{Delay, Duration};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use eddie_core::{Controller, Indicator, InputEvent, Vocabulary};
use eddie_drivers::{Button, GroveLcd, Led, Rotary};
use eddie_hal_firmata::{FirmataLink, SerialPort};

use crate::channels::{Inbox, ADVANCE_LEVELS, BOARD_READY, MARK_LEVELS, QUIT, SHUTDOWN};
use crate::error::HostError;
use crate::tasks::{Handshake, PinRoutes};

mod channels;
mod config;
mod error;
mod tasks;

/// Time the board gets to boot and report its firmware
///
/// Opening the port resets most Arduinos; StandardFirmata needs a couple of
/// seconds before it answers.
const BOARD_TIMEOUT_S: u64 = 10;

/// Vocabulary trainer for a Firmata board with a Grove RGB LCD
#[derive(Parser, Debug)]
#[command(name = "eddie")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to the embedded eddie.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serial device of the board, overrides serial.port
    #[arg(short, long)]
    port: Option<String>,

    /// Seed for the word order and colors
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter (trace, debug, info, warn, error); RUST_LOG wins
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let code = match run(args).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    };
    std::process::exit(code);
}

async fn run(args: Args) -> Result<(), HostError> {
    info!("Eddie starting");

    let mut config = config::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.serial.port = port;
    }
    config.validate()?;

    let vocabulary = Vocabulary::spanish()?;
    info!(
        words = vocabulary.word_count(),
        sentences = vocabulary.sentence_count(),
        "vocabulary loaded"
    );

    // Board link: reader thread first so the boot report is not missed
    let port = SerialPort::open(&config.serial.port, &config.uart())?;
    info!(port = %config.serial.port, baud = config.serial.baud, "serial port open");
    tasks::spawn_reader(port.try_clone()?, PinRoutes::from(&config.pins))?;
    tasks::spawn_signal_listener(&SHUTDOWN)?;

    let mut link = FirmataLink::new(port);
    link.query_firmware()?;
    let timeout = Duration::from_secs(BOARD_TIMEOUT_S);
    if tasks::wait_for_board(&QUIT, &BOARD_READY, timeout).await? == Handshake::Quit {
        info!("quit before the board answered");
        return Ok(());
    }
    // From here a quit waits on its lane; the controller loop takes it first
    link.configure(&config.board_setup())?;
    let link = link.into_shared();

    let mut lcd = GroveLcd::new(link.i2c(), Delay);
    lcd.init()?;
    let mut led = Led::new(
        link.output_pin(config.pins.indicator),
        config.pins.indicator_inverted,
    );
    led.off()?;
    info!("display and indicator ready");

    let seed = args.seed.unwrap_or_else(entropy_seed);
    info!(seed, "random source seeded");

    let mut controller = Controller::new(
        lcd,
        led,
        vocabulary,
        ChaCha8Rng::seed_from_u64(seed),
        config.controller(),
    );
    controller.greet(&config.greeting())?;

    let active_low = config.pins.buttons_active_low;
    let advance = tasks::button_task(
        &ADVANCE_LEVELS,
        Button::new(InputEvent::AdvancePressed, active_low),
    );
    let mark = tasks::button_task(
        &MARK_LEVELS,
        Button::new(InputEvent::MarkPressed, active_low),
    );
    let rotary = tasks::rotary_task(Rotary::new());

    let consumer = tasks::controller_task(&mut controller, Inbox::global(), Delay);
    match select4(consumer, advance, mark, rotary).await {
        Either4::First(result) => result,
        // Input tasks never finish
        _ => Ok(()),
    }
}

/// Seed from the clock and process id when none is given
fn entropy_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    nanos ^ (u64::from(std::process::id()) << 32)
}
