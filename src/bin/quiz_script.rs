//! Headless quiz driver: commands on stdin, journal JSON lines on stdout.
//!
//! ```text
//! printf 'start\nwait 3000\nstate\n' | QUIZ_SEED=7 quiz-script
//! ```

use std::io::{self, BufWriter};

use anyhow::Result;
use tracing::{info, warn};

use tui_quiz::config::AppConfig;
use tui_quiz::core::QuizEngine;
use tui_quiz::script::ScriptRunner;
use tui_quiz::telemetry::init_tracing;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if init_tracing(&config.log)? {
        for warning in &config.warnings {
            warn!("{warning}");
        }
    } else {
        for warning in &config.warnings {
            eprintln!("warning: {warning}");
        }
    }

    let mut engine = QuizEngine::new(config.seed);
    engine.set_difficulty(config.difficulty);
    info!(seed = config.seed, "script run starting");

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    let mut runner = ScriptRunner::new(engine);
    runner.run(stdin.lock(), &mut out, &mut err)
}
