mod config;
mod farewell;
mod game;
mod logging;
mod random;
mod roster;
mod ui;
mod view;
mod words;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use config::GameConfig;
use roster::LanguageRoster;
use std::path::PathBuf;
use view::GameView;
use words::{BUILTIN_WORDS, WordBank};

#[derive(Parser)]
#[command(
    name = "assembly-endgame",
    version,
    about = "Guess the word before every language falls to Assembly"
)]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command
{
    /// Play in the terminal (default)
    Play(PlayArgs),
    /// Print the word bank
    Words(WordsArgs),
    /// Print the languages in the order they are lost
    Roster,
}

#[derive(Args, Default)]
struct PlayArgs
{
    /// Seed for reproducible rounds [env: ENDGAME_SEED]
    #[arg(long)]
    seed: Option<u64>,
    /// Word list file, one word per line [env: ENDGAME_WORDS_FILE]
    #[arg(long, value_name = "PATH")]
    words: Option<PathBuf>,
}

#[derive(Args)]
struct WordsArgs
{
    /// Word list file, one word per line [env: ENDGAME_WORDS_FILE]
    #[arg(long, value_name = "PATH")]
    words: Option<PathBuf>,
}

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()>
{
    // Load .env if present.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = GameConfig::from_env()?;

    match cli.command {
        None => play(config, PlayArgs::default()),
        Some(Command::Play(args)) => play(config, args),
        Some(Command::Words(args)) => {
            logging::init_stderr();
            list_words(config.with_overrides(None, args.words))
        }
        Some(Command::Roster) => {
            list_roster();
            Ok(())
        }
    }
}

fn play(config: GameConfig, args: PlayArgs) -> Result<()>
{
    let config = config.with_overrides(args.seed, args.words);
    let _guard = logging::init_file(config.log_dir.as_deref())?;

    let bank = load_bank(&config)?;
    let rng = random::entropy(config.seed);
    let mut view = GameView::new(bank, LanguageRoster::builtin(), rng);
    ui::run(&mut view)?;
    Ok(())
}

fn load_bank(config: &GameConfig) -> Result<WordBank>
{
    match &config.words_file {
        Some(path) => Ok(WordBank::from_file(path)?),
        None => Ok(WordBank::new(BUILTIN_WORDS)?),
    }
}

fn list_words(config: GameConfig) -> Result<()>
{
    let bank = load_bank(&config)?;
    for word in bank.words() {
        println!("{word}");
    }
    Ok(())
}

fn list_roster()
{
    let roster = LanguageRoster::builtin();
    println!("{} languages, first lost to last standing:", roster.len());
    for (severity, lang) in roster.iter() {
        println!("  {}. {}", severity + 1, lang.name);
    }
    println!();
    println!("{} wrong guesses end the round.", roster.guesses_allowed());
}
