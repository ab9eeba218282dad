//! Flip gomoku GUI
//!
//! Five-in-a-row where stones sometimes land with the other color.

use std::path::PathBuf;

use clap::Parser;
use gomoku_flip::ui::{GameState, GomokuApp};
use gomoku_flip::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gomoku-flip", about = "Five-in-a-row with secretly flipped stones")]
struct Cli {
    /// TOML config file
    #[arg(long, default_value = "gomoku-flip.toml")]
    config: PathBuf,

    /// Flip probability in percent (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    flip_prob: Option<u32>,

    /// Seed for the flip source
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(percent) = cli.flip_prob {
        config.game.flip_probability = f64::from(percent) / 100.0;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    config.validate()?;

    let state = GameState::new(&config.game)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Flip Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Flip Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )?;
    Ok(())
}
