use clap::Parser;
use rs_mastermind::{GameConfig, GuessResult, Session};
use std::io;
use std::io::Write;

/// Plays a game of Mastermind in the terminal. The computer picks a secret
/// numeric code, and you try to break it within the guess budget.
///
/// All settings are positional and optional, but partial settings must be
/// contiguous: to set the code length you must also set the guess budget, and
/// the value range must be given as a complete MIN_VALUE MAX_VALUE pair.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Whether the secret code may hold the same value more than once
    /// (true or false).
    #[clap(parse(try_from_str))]
    duplicates_allowed: Option<bool>,

    /// The total number of guesses you get before the game ends.
    guess_budget: Option<u32>,

    /// The number of positions in the secret code.
    code_length: Option<usize>,

    /// The smallest value the code may hold, between 0 and 9.
    min_value: Option<u8>,

    /// The largest value the code may hold, between 0 and 9.
    max_value: Option<u8>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.min_value.is_some() != args.max_value.is_some() {
        eprintln!("Error: the value range requires both MIN_VALUE and MAX_VALUE.");
        std::process::exit(2);
    }

    let mut config = GameConfig::default();
    if let Some(duplicates_allowed) = args.duplicates_allowed {
        config.duplicates_allowed = duplicates_allowed;
    }
    if let Some(guess_budget) = args.guess_budget {
        config.guess_budget = guess_budget;
    }
    if let Some(code_length) = args.code_length {
        config.code_length = code_length;
    }
    if let Some(min_value) = args.min_value {
        config.min_value = min_value;
    }
    if let Some(max_value) = args.max_value {
        config.max_value = max_value;
    }

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };
    session.start(&mut rand::thread_rng());

    println!("Welcome to Mastermind!");
    println!(
        "You should enter numbers between {} and {}.",
        config.min_value, config.max_value
    );
    println!(
        "Can you break the code in just {} guesses?",
        config.guess_budget
    );

    while !session.is_terminal() {
        print!("Guess {}: ", session.guesses_taken() + 1);
        io::stdout().flush()?;

        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        let guess = buffer.trim_end();

        match session.submit_guess(guess) {
            // The win is announced below, not through a score line.
            GuessResult::Scored {
                is_perfect: true, ..
            } => break,
            GuessResult::Scored { score, .. } if !score.is_empty() => println!("{}", score),
            GuessResult::Scored { .. } => {}
            GuessResult::Rejected(message) => println!("{}", message),
        }
    }

    let end_message = if session.won() {
        "You solved it!"
    } else {
        "Sorry you lost"
    };
    println!("{}", end_message);

    Ok(())
}
