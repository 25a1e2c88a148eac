use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_dominoes::{EventSink, JsonNarrator, Match, MatchConfig, Narrator, PlayerId};

/// Play one automated game of dominoes and narrate it.
#[derive(Parser, Debug)]
#[command(name = "dominoes", version, about)]
struct Cli {
    /// Shuffle seed; the same seed replays the same match
    #[arg(short, long)]
    seed: Option<u64>,

    /// Highest pip value on a tile side
    #[arg(long, default_value_t = 6)]
    pip_max: u8,

    /// Tiles dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Name of the first player
    #[arg(long, default_value = "Jackson")]
    player_one: String,

    /// Name of the second player
    #[arg(long, default_value = "Syberen")]
    player_two: String,

    /// Emit events as JSON lines instead of narration
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> MatchConfig {
        let mut config = MatchConfig::default()
            .with_pip_max(self.pip_max)
            .with_hand_size(self.hand_size)
            .with_player_name(PlayerId::One, self.player_one.clone())
            .with_player_name(PlayerId::Two, self.player_two.clone());
        config.seed = self.seed;
        config
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rust_dominoes=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rust_dominoes=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let mut game = Match::new(cli.config())?;

    let mut sink: Box<dyn EventSink> = if cli.json {
        Box::new(JsonNarrator::new(std::io::stdout().lock()))
    } else {
        Box::new(Narrator)
    };

    match game.play(sink.as_mut()) {
        Ok(result) => {
            tracing::info!(?result, seed = game.seed(), "match finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, seed = game.seed(), "match aborted");
            Err(e.into())
        }
    }
}
