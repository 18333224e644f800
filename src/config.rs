// config.rs

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "cli-calculator", version, about = "Interactive menu-driven calculator")]
pub struct Cli {
    /// Read input without line editing, even on a terminal
    #[arg(long)]
    pub plain: bool,

    /// Do not wait for enter after an invalid number
    #[arg(long)]
    pub no_pause: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            pause_on_invalid_number: !self.no_pause,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub pause_on_invalid_number: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_on_invalid_number: true,
        }
    }
}
