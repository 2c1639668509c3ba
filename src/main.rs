use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use simon::config::GameSettings;
use simon::game::GameController;
use simon::io::{
    ConsoleScoreDisplay, FixedSwitches, PressLatch, console_channels, spawn_stdin_reader,
};
use simon::store::FileScoreStore;
use simon::traits::SystemClock;
use simon::util::logging::init_logging;

/// How long a typed keypress counts as held, approximating a button tap.
const KEY_HOLD: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "simon", about = "Simon memory game on a console-simulated panel")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Path of the persisted high-score record
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Number of active difficulty switches; each one shortens the timers
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    switches: u8,

    /// Seed for the sequence generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging(args.log_dir.as_deref(), args.verbose)?;

    let settings = GameSettings::load();
    let score_path = args
        .score_file
        .unwrap_or_else(FileScoreStore::default_path);
    info!("high score record: {}", score_path.display());

    let latch = Arc::new(PressLatch::new());
    let channels = console_channels(&latch);
    spawn_stdin_reader(latch, channels.len(), KEY_HOLD);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut controller = GameController::new(
        channels,
        Box::new(FixedSwitches::with_active(args.switches as usize, 2)),
        Box::new(FileScoreStore::new(score_path)),
        Some(Box::new(ConsoleScoreDisplay::new())),
        SystemClock::new(),
        rng,
        settings,
    );

    println!("Type 1-4 and press Enter to answer. Ctrl-C quits.");
    controller.run()
}
