//! Interactive solver assistant for games played elsewhere

use super::read_input;
use crate::core::{Mark, Verdict, Word};
use crate::output::format_hints;
use crate::solver::{Solver, SolverError};
use crate::wordlist::Wordset;
use anyhow::Result;

/// How many candidate words a hint line shows before truncating
const HINT_LIMIT: usize = 20;

/// Run the interactive assistant
///
/// Each round the user reports a guess and the verdict their game showed
/// for it, and the assistant narrows the candidates until one word remains
/// or the feedback turns out to be contradictory.
///
/// # Errors
/// Returns an error if input cannot be read.
pub fn run_assist(wordset: &Wordset) -> Result<()> {
    print_legend(wordset);

    let mut solver = Solver::new(wordset);
    print_status(&solver);

    loop {
        let Some(input) = read_input("guess verdict> ")? else {
            break;
        };
        if input.is_empty() {
            continue;
        }
        match input.as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "reset" => {
                solver.reset();
                println!("Starting over.");
                print_status(&solver);
                continue;
            }
            _ => {}
        }

        let Some((guess, verdict)) = parse_round(&input) else {
            println!("Enter a guess and its verdict, like: crane +?__?");
            continue;
        };

        match solver.record(&guess, &verdict) {
            Ok(1) => {
                if let Ok(word) = solver.propose_guess() {
                    println!("The word is '{word}'!");
                }
                break;
            }
            Ok(_) => print_status(&solver),
            Err(err @ SolverError::LengthMismatch { .. }) => println!("{err}"),
            Err(SolverError::Exhausted) => {
                println!("No dictionary word fits that feedback:");
                for (guess, verdict) in solver.history() {
                    println!("  {guess} {verdict}");
                }
                break;
            }
        }
    }

    Ok(())
}

/// Parse one "guess verdict" line
fn parse_round(input: &str) -> Option<(Word, Verdict)> {
    let mut tokens = input.split_whitespace();
    let guess = Word::new(tokens.next()?).ok()?;
    let verdict = Verdict::from_symbols(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some((guess, verdict))
}

fn print_status(solver: &Solver<'_>) {
    println!(
        "{} candidates: {}",
        solver.count(),
        format_hints(solver.candidates(), HINT_LIMIT)
    );
}

fn print_legend(wordset: &Wordset) {
    println!();
    println!("Report each guess with its verdict, one mark per letter:");
    println!("  +  {}  letter in the right spot", Mark::Exact.emoji());
    println!("  ?  {}  letter in the word, wrong spot", Mark::Present.emoji());
    println!("  _  {}  letter not in the word", Mark::Absent.emoji());

    if let Some(example_word) = wordset.random_word() {
        let mut marks = vec![Mark::Absent; wordset.word_length()];
        if let Some(first) = marks.first_mut() {
            *first = Mark::Exact;
        }
        let example = Verdict::new(marks);
        println!();
        println!(
            "Example: {example_word} {example}  (or {})",
            example.to_emoji()
        );
    }
    println!("Commands: 'new' starts over, 'quit' exits.\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_guess_verdict_pair() {
        let (guess, verdict) = parse_round("crane +?__?").unwrap();
        assert_eq!(guess.text(), "crane");
        assert_eq!(verdict.to_string(), "+?__?");
    }

    #[test]
    fn parses_emoji_verdicts() {
        let (guess, verdict) = parse_round("pudło 🟩⬛⬛⬛⬛").unwrap();
        assert_eq!(guess.text(), "pudło");
        assert_eq!(verdict.to_string(), "+____");
    }

    #[test]
    fn rejects_malformed_rounds() {
        assert!(parse_round("crane").is_none());
        assert!(parse_round("crane +?__? extra").is_none());
        assert!(parse_round("crane +?x big").is_none());
        assert!(parse_round("cr4ne +?__?").is_none());
        assert!(parse_round("").is_none());
    }
}
