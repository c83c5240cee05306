//! # Burrow Main Entry Point
//!
//! Loads the character, generates a dungeon and runs one exploration session in the terminal.

use burrow::{
    Character, CharacterStore, DuelCombat, DungeonSession, ExplorationLoop, GenerationConfig,
    JsonCharacterStore, RandomItemGenerator, RoomResolver, SessionResult, TerminalPrompt,
    TextRenderer, BurrowResult,
};
use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;

/// Command line arguments for Burrow.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(about = "Explore a procedurally generated maze dungeon")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rooms along each side of the dungeon (3, 5, 7, 9 or 11)
    #[arg(long, default_value_t = burrow::config::DEFAULT_DUNGEON_SIZE)]
    size: u32,

    /// Character save file
    #[arg(short, long, default_value = "character.json")]
    character: PathBuf,

    /// Name for a new character when no save exists
    #[arg(long, default_value = "Adventurer")]
    name: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Burrow v{}", burrow::VERSION);

    if let Err(e) = run(&args) {
        error!("Session aborted: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(log_level))
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

/// Runs one exploration session from start to finish.
fn run(args: &Args) -> BurrowResult<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    #[cfg(feature = "dev-tools")]
    let _span = tracing::info_span!("session", seed).entered();
    info!("Generating dungeons with seed: {}", seed);

    // Size is checked before anything is shown.
    let config = GenerationConfig::with_side(seed, args.size)?;
    let mut session = DungeonSession::new(config)?;

    let mut store = JsonCharacterStore::new(&args.character);
    let mut character = match store.load()? {
        Some(character) => {
            info!("Loaded {} from {}", character.name, args.character.display());
            character
        }
        None => Character::new(args.name.clone()),
    };
    if !character.is_alive() {
        println!("{} rests and recovers before setting out.", character.name);
        character.hp = character.max_hp;
    }

    let mut resolver = RoomResolver::new(
        DuelCombat::new(seed.wrapping_add(1)),
        RandomItemGenerator::new(seed.wrapping_add(2)),
        seed.wrapping_add(3),
    );
    let stdin = io::stdin();
    let mut prompt = TerminalPrompt::new(stdin.lock(), io::stdout());
    let renderer = TextRenderer::new();

    println!(
        "{} (level {}, {}/{} hp) descends into the dungeon.",
        character.name, character.level, character.hp, character.max_hp
    );

    let result = ExplorationLoop::new(&mut session, &mut resolver, &mut prompt, &renderer)
        .with_store(&mut store)
        .run(&mut character)?;

    match result {
        SessionResult::Completed => println!("The boss is slain. The dungeon is yours!"),
        SessionResult::Fled => println!("You make it out alive, this time."),
        SessionResult::Died => println!("{} has fallen.", character.name),
    }
    println!(
        "{}: {} xp, {} items carried.",
        character.name,
        character.xp,
        character.inventory.len()
    );

    Ok(())
}
