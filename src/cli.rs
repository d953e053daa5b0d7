use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::GameConfig;
use crate::core::engine::Engine;
use crate::core::game::Sampler;
use crate::games::cricket::{
    FeedSampler, FingerCounter, Fingers, KeySampler, OpponentHand, Outcome, RandomOpponent, Resolver, Scoreboard,
    RULES,
};

#[derive(Parser, Debug)]
#[command(name = "handcricket")]
#[command(about = "🏏 Hand cricket against the computer, played with finger counts")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Play with the keyboard standing in for the camera (default)
    Play,
    /// Replay a recorded JSON-lines gesture feed, one line per sampling tick
    Feed {
        /// Feed file to replay
        path: PathBuf,
    },
    /// Print the rules and the effective configuration
    Rules,
}

/// Config overrides shared by every command
#[derive(Args, Debug, Default)]
pub struct Settings {
    /// JSON config file, applied before the flags below
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sampling ticks between round resolutions
    #[arg(long, global = true)]
    pub ticks_per_round: Option<u32>,

    /// Pause after an out before play moves on
    #[arg(long = "dismissal-seconds", global = true)]
    pub dismissal_seconds: Option<f64>,

    /// Sampling interval in milliseconds
    #[arg(long = "poll-ms", global = true)]
    pub poll_ms: Option<u64>,

    /// Seed the computer's numbers for a reproducible game
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Hold a due round until a hand is shown instead of scoring it as 0
    #[arg(long = "skip-empty-rounds", global = true)]
    pub skip_empty_rounds: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Config file first, then flags, then validation
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(ticks) = self.ticks_per_round {
            config.ticks_per_round = ticks;
        }
        if let Some(seconds) = self.dismissal_seconds {
            config.dismissal_display_seconds = seconds;
        }
        if let Some(ms) = self.poll_ms {
            config.poll_interval_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.skip_empty_rounds {
            config.skip_rounds_without_hand = true;
        }
        config.validate()?;
        Ok(config)
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.settings.log_file.as_deref())?;
    let config = cli.settings.game_config()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play(config, KeySampler::new()).await,
        Commands::Feed { path } => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open feed {}", path.display()))?;
            play(config, FeedSampler::new(BufReader::new(file), FingerCounter)).await
        }
        Commands::Rules => {
            println!("{RULES}");
            println!();
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

async fn play<S: Sampler<Fingers>>(config: GameConfig, sampler: S) -> Result<()> {
    info!(?config, "starting game");
    let opponent = RandomOpponent::from_seed(config.seed);
    let resolver = Resolver::new(config.clone(), opponent, SystemClock);
    let engine = Engine::new(resolver, sampler, Scoreboard, config.poll_interval());

    let terminal = ratatui::init();
    let result = engine.run(terminal).await;
    ratatui::restore();

    let resolver = result?;
    println!("{}", summary(&resolver));
    Ok(())
}

/// Closing line. Quitting during the GAME OVER banner still reports the
/// result.
fn summary<O: OpponentHand, C: Clock>(resolver: &Resolver<O, C>) -> String {
    let state = resolver.state();
    let verdict = match resolver.final_outcome() {
        Some(Outcome::PlayerWin) => "🏆 Player wins!",
        Some(Outcome::ComputerWin) => "Computer wins!",
        Some(Outcome::Tie) => "It's a tie!",
        None => "👋 Game abandoned",
    };
    format!("{verdict}  Player {} - Computer {}", state.player_score, state.computer_score)
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
