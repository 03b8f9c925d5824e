use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use uno_solo::uno_game::controller::GameController;
use uno_solo::uno_game::ui::ConsoleUI;
use uno_solo::uno_game::GameState;

/// Play Uno in the terminal against computer players.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Your name at the table
    #[arg(short, long, default_value = "Player")]
    name: String,

    /// Number of computer opponents
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    computers: u8,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,

    /// Seed for shuffling and computer choices, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!("Starting game with {:?}", cli);

    let state = GameState::new_game(&cli.name, usize::from(cli.computers), &mut rng)?;
    let mut controller = GameController::new(
        state,
        ConsoleUI::new(),
        rng,
        Duration::from_millis(cli.delay_ms),
    );
    controller.run().await?;

    Ok(())
}
