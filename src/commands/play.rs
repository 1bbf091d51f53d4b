//! Interactive game mode

use super::read_input;
use crate::core::Word;
use crate::game::{Game, GuessOutcome};
use crate::output::{colored_guess, print_win_banner};
use crate::wordlist::Wordset;
use anyhow::Result;

/// Run an interactive game with a randomly drawn secret
///
/// Guesses are scored until the secret is found; 'quit' gives up and
/// reveals it.
///
/// # Errors
/// Returns an error if the wordset is empty or input cannot be read.
pub fn run_play(wordset: &Wordset) -> Result<()> {
    let mut game = Game::new(wordset)?;

    println!();
    println!(
        "I picked a {}-letter word out of {}. Guess it!",
        wordset.word_length(),
        wordset.len()
    );
    println!("Type a guess and press Enter. 'quit' reveals the word.\n");

    loop {
        let Some(input) = read_input("> ")? else {
            println!("\nThe word was '{}'.", game.secret());
            break;
        };
        if input.is_empty() {
            continue;
        }
        if matches!(input.as_str(), "quit" | "q" | "exit") {
            println!("The word was '{}'.", game.secret());
            break;
        }

        let guess = match Word::new(input.as_str()) {
            Ok(word) => word,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match game.submit_guess(&guess) {
            GuessOutcome::Scored { verdict, won } => {
                println!("{}  {}", colored_guess(&guess, &verdict), verdict.to_emoji());
                if won {
                    print_win_banner(game.history());
                    break;
                }
            }
            GuessOutcome::UnknownWord => {
                println!("'{guess}' is not in the dictionary, ignoring.");
            }
            GuessOutcome::AlreadyWon => break,
        }
    }

    Ok(())
}
