//! Wordle in the terminal
//!
//! Play against a random secret, get solver help for a game played
//! elsewhere, or watch the solver work through the dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordlet::{
    commands::{run_assist, run_bench, run_play, run_solve},
    output::print_bench_report,
    wordlist::{Language, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordlet",
    about = "Wordle game and solver for the terminal, with multi-language dictionaries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary language: american-english (default) or polish
    #[arg(short, long, global = true, default_value = "american-english")]
    language: String,

    /// Directory holding the dictionary files
    #[arg(short = 'd', long, global = true, default_value = "/usr/share/dict")]
    dict_dir: PathBuf,

    /// Word length to play with
    #[arg(short = 'n', long, global = true, default_value_t = 5)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a random secret (default)
    Play,

    /// Get solver suggestions for a game played elsewhere
    Assist,

    /// Watch the solver work out a word
    Solve {
        /// The secret to solve; random if omitted
        word: Option<String>,

        /// Show candidate counts for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver over the dictionary
    Bench {
        /// Number of random words to test instead of all of them
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(language) = Language::from_id(&cli.language) else {
        bail!(
            "Unknown language '{}'; available: {}",
            cli.language,
            Language::KNOWN_IDS.join(", ")
        );
    };

    let wordset = load_dictionary(&cli.dict_dir, &language, cli.length).with_context(|| {
        format!(
            "Cannot read the '{}' dictionary under {}",
            language.id(),
            cli.dict_dir.display()
        )
    })?;
    if wordset.is_empty() {
        bail!(
            "No {}-letter '{}' words found under {}",
            cli.length,
            language.id(),
            cli.dict_dir.display()
        );
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&wordset),
        Commands::Assist => run_assist(&wordset),
        Commands::Solve { word, verbose } => run_solve(&wordset, word.as_deref(), verbose),
        Commands::Bench { limit } => {
            let report = run_bench(&wordset, limit);
            print_bench_report(&report);
            Ok(())
        }
    }
}
