//! Word suggestions for players who cannot think of a secret word.

use crate::dice::RandomSource;
use tracing::{debug, instrument};

/// Words offered when no list is configured.
pub const DEFAULT_SUGGESTIONS: [&str; 5] = ["Pizza", "Beach", "Library", "Hospital", "School"];

/// A fixed list of candidate secret words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSuggestions {
    words: Vec<String>,
}

impl WordSuggestions {
    /// Builds a list, dropping blank entries.
    ///
    /// Falls back to [`DEFAULT_SUGGESTIONS`] if nothing usable remains.
    #[instrument(skip(words))]
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            debug!("No usable suggestions, using defaults");
            return Self::default();
        }
        debug!(count = words.len(), "Word suggestions loaded");
        Self { words }
    }

    /// Returns every suggestion.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Picks one suggestion uniformly.
    pub fn pick<S: RandomSource + ?Sized>(&self, dice: &mut S) -> &str {
        let face = dice.roll(self.words.len()).clamp(1, self.words.len());
        &self.words[face - 1]
    }
}

impl Default for WordSuggestions {
    fn default() -> Self {
        Self {
            words: DEFAULT_SUGGESTIONS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Dice, FixedRoll};

    #[test]
    fn test_blank_entries_dropped() {
        let words = WordSuggestions::new(["  Moon ", "", "   ", "Castle"]);
        assert_eq!(words.words(), ["Moon", "Castle"]);
    }

    #[test]
    fn test_empty_list_falls_back_to_defaults() {
        let words = WordSuggestions::new(Vec::<String>::new());
        assert_eq!(words, WordSuggestions::default());
        assert_eq!(words.words().len(), DEFAULT_SUGGESTIONS.len());
    }

    #[test]
    fn test_pick_uses_the_roll() {
        let words = WordSuggestions::default();
        assert_eq!(words.pick(&mut FixedRoll(1)), "Pizza");
        assert_eq!(words.pick(&mut FixedRoll(5)), "School");
    }

    #[test]
    fn test_pick_always_from_list() {
        let words = WordSuggestions::default();
        let mut dice = Dice::seeded(11);
        for _ in 0..100 {
            let word = words.pick(&mut dice);
            assert!(DEFAULT_SUGGESTIONS.contains(&word));
        }
    }
}
