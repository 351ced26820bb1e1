use crate::config::GameConfig;
use crate::results::*;
use crate::secret::Secret;
use rand::Rng;
use std::collections::HashMap;

/// A single game: owns the settings, the hidden code, and the number of
/// guesses taken so far.
///
/// A session is created with validated settings, started once to generate the
/// secret code, and then fed raw guess strings until it reports a terminal
/// state.
pub struct Session {
    config: GameConfig,
    secret: Option<Secret>,
    guess_count: u32,
    state: SessionState,
}

impl Session {
    /// Creates a session with the given settings, checking them eagerly.
    ///
    /// The secret code is not generated until [`Session::start`] or
    /// [`Session::start_with_secret`] is called.
    pub fn new(config: GameConfig) -> Result<Session, MastermindError> {
        config.validate()?;
        Ok(Session {
            config,
            secret: None,
            guess_count: 0,
            state: SessionState::Active,
        })
    }

    /// Generates the secret code and begins accepting guesses.
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.secret = Some(Secret::generate(&self.config, rng));
    }

    /// Begins the session with a fixed secret code instead of a random one.
    ///
    /// # Panics
    ///
    /// Panics if the code does not have the configured number of positions.
    pub fn start_with_secret(&mut self, secret: Secret) {
        if secret.len() != self.config.code_length {
            panic!(
                "Secret length ({}) must match the configured code length ({})",
                secret.len(),
                self.config.code_length
            );
        }
        self.secret = Some(secret);
    }

    /// Scores one guess against the secret code.
    ///
    /// Every submission consumes a turn, including submissions that are
    /// rejected before scoring. A perfect guess moves the session to
    /// [`SessionState::Won`]; consuming the last turn on anything else moves
    /// it to [`SessionState::Exhausted`].
    ///
    /// # Panics
    ///
    /// Panics if the session has not been started, or has already ended.
    pub fn submit_guess(&mut self, raw_guess: &str) -> GuessResult {
        if self.state != SessionState::Active {
            panic!("submit_guess called on a session that has already ended");
        }
        let secret = match &self.secret {
            Some(secret) => secret,
            None => panic!("submit_guess called before the session was started"),
        };

        self.guess_count += 1;
        let result = score_guess(&self.config, secret, raw_guess);

        match &result {
            GuessResult::Scored {
                is_perfect: true, ..
            } => self.state = SessionState::Won,
            _ if self.guess_count == self.config.guess_budget => {
                self.state = SessionState::Exhausted
            }
            _ => {}
        }
        result
    }

    /// Returns `true` once the session has stopped accepting guesses.
    pub fn is_terminal(&self) -> bool {
        self.state != SessionState::Active
    }

    /// Returns `true` iff a guess matched the secret code perfectly.
    pub fn won(&self) -> bool {
        self.state == SessionState::Won
    }

    /// The current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The number of guesses submitted so far, rejected ones included.
    pub fn guesses_taken(&self) -> u32 {
        self.guess_count
    }

    /// The settings this session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Determines the result of the given raw guess against the given secret.
///
/// The guess must have exactly `code_length` characters, each a decimal digit
/// within the configured value range; anything else rejects the whole guess.
pub fn score_guess(config: &GameConfig, secret: &Secret, raw_guess: &str) -> GuessResult {
    if raw_guess.chars().count() != config.code_length {
        return GuessResult::Rejected(format!(
            "Guess must be {} numbers long!",
            config.code_length
        ));
    }
    let values = match parse_guess(config, raw_guess) {
        Ok(values) => values,
        Err(message) => return GuessResult::Rejected(message),
    };

    let mut exact_matches = 0;
    let mut value_matches = 0;
    let mut is_perfect = true;

    // Number of secret occurrences already credited per value, so that no
    // occurrence is counted twice across the guess.
    let mut credited: HashMap<u8, usize> = HashMap::new();
    for (index, value) in values.iter().copied().enumerate() {
        let available = secret.occurrence_count(value);
        let used = credited.get(&value).copied().unwrap_or(0);
        if available > 0 && used == available {
            // Every occurrence of this value has been credited already.
            is_perfect = false;
            continue;
        }

        if secret.is_at(value, index) {
            exact_matches += 1;
            *credited.entry(value).or_insert(0) += 1;
        } else if available > 0 {
            value_matches += 1;
            *credited.entry(value).or_insert(0) += 1;
            is_perfect = false;
        } else {
            is_perfect = false;
        }
    }

    GuessResult::Scored {
        score: format_score(exact_matches, value_matches),
        is_perfect,
    }
}

/// Parses every character of the guess as a value within the configured
/// range. A single bad character rejects the whole guess.
fn parse_guess(config: &GameConfig, raw_guess: &str) -> Result<Vec<u8>, String> {
    let mut values = Vec::with_capacity(config.code_length);
    for character in raw_guess.chars() {
        let maybe_value = character
            .to_digit(10)
            .map(|digit| digit as u8)
            .filter(|value| *value >= config.min_value && *value <= config.max_value);
        match maybe_value {
            Some(value) => values.push(value),
            None => {
                return Err(format!(
                    "Invalid guess: values must be numbers between {} and {}!",
                    config.min_value, config.max_value
                ))
            }
        }
    }
    Ok(values)
}

/// Constructs a score string from the given match counts, all pluses first.
fn format_score(exact_matches: usize, value_matches: usize) -> String {
    let mut score = String::with_capacity(exact_matches + value_matches);
    score.push_str(&"+".repeat(exact_matches));
    score.push_str(&"-".repeat(value_matches));
    score
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;

    fn scored(score: &str, is_perfect: bool) -> GuessResult {
        GuessResult::Scored {
            score: score.to_string(),
            is_perfect,
        }
    }

    #[test]
    fn score_guess_exact_match_everywhere() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[0, 1, 2, 3]);

        assert_eq!(
            score_guess(&config, &secret, "0123"),
            scored("++++", true)
        );
    }

    #[test]
    fn score_guess_no_match_anywhere() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[0, 1, 2, 3]);

        assert_eq!(score_guess(&config, &secret, "4567"), scored("", false));
    }

    #[test]
    fn score_guess_shifted_values() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[0, 1, 2, 3]);

        assert_eq!(score_guess(&config, &secret, "1234"), scored("---", false));
    }

    #[test]
    fn score_guess_orders_pluses_before_minuses() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[1, 2, 3, 4]);

        // Positions 0 and 2 are exact, positions 1 and 3 are displaced.
        assert_eq!(score_guess(&config, &secret, "1432"), scored("++--", false));
    }

    #[test]
    fn score_guess_consumes_each_secret_occurrence_once() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[0, 1, 2, 3]);

        // The first '1' takes the only occurrence as a value match, so the
        // exact match at position 1 is never credited.
        assert_eq!(score_guess(&config, &secret, "1111"), scored("-", false));
    }

    #[test]
    fn score_guess_credits_repeated_secret_values() {
        let config = GameConfig {
            duplicates_allowed: true,
            ..GameConfig::default()
        };
        let secret = Secret::from_values(&[1, 1, 2, 3]);

        assert_eq!(score_guess(&config, &secret, "1111"), scored("++", false));
    }

    #[test]
    fn score_guess_all_value_matches_is_not_perfect() {
        let config = GameConfig {
            code_length: 2,
            ..GameConfig::default()
        };
        let secret = Secret::from_values(&[0, 1]);

        assert_eq!(score_guess(&config, &secret, "10"), scored("--", false));
    }

    #[test]
    fn score_guess_rejects_wrong_length() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[0, 1, 2, 3]);

        assert_eq!(
            score_guess(&config, &secret, "012"),
            GuessResult::Rejected("Guess must be 4 numbers long!".to_string())
        );
    }

    #[test]
    fn score_guess_rejects_value_outside_range() {
        let config = GameConfig {
            min_value: 1,
            max_value: 6,
            ..GameConfig::default()
        };
        let secret = Secret::from_values(&[1, 2, 3, 4]);

        assert_eq!(
            score_guess(&config, &secret, "1237"),
            GuessResult::Rejected("Invalid guess: values must be numbers between 1 and 6!".to_string())
        );
    }

    #[test]
    fn score_guess_rejects_non_digit_characters() {
        let config = GameConfig::default();
        let secret = Secret::from_values(&[0, 1, 2, 3]);

        assert_matches!(
            score_guess(&config, &secret, "01a3"),
            GuessResult::Rejected(_)
        );
    }

    #[test]
    fn parse_guess_keeps_position_order() {
        let config = GameConfig::default();

        assert_eq!(parse_guess(&config, "9041"), Ok(vec![9, 0, 4, 1]));
    }

    #[test]
    fn format_score_empty_when_nothing_matched() {
        assert_eq!(format_score(0, 0), "");
    }
}
