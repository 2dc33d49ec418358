use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tokenizer::tokenize;

/// The analysis to run over the loaded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Counts whitespace-separated words.
    WordCount,
    /// Finds the word that occurs most often.
    MostRepeatedWord,
}

impl Strategy {
    pub fn analyze(&self, text: &str) -> Report {
        match self {
            Strategy::WordCount => word_count(text),
            Strategy::MostRepeatedWord => most_repeated_word(text),
        }
    }

    /// The name this strategy is selected by on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::WordCount => "wordCount",
            Strategy::MostRepeatedWord => "MostRepeatedWords",
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wordCount" => Ok(Strategy::WordCount),
            "MostRepeatedWords" => Ok(Strategy::MostRepeatedWord),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    WordCount { count: usize },
    MostRepeatedWord { word: String, count: usize },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::WordCount { count } => write!(f, "Кількість слів: {}", count),
            Report::MostRepeatedWord { word, count } => {
                write!(f, "Most repeated word: {} (repeated {} times)", word, count)
            }
        }
    }
}

fn word_count(text: &str) -> Report {
    Report::WordCount {
        count: tokenize(text).len(),
    }
}

fn most_repeated_word(text: &str) -> Report {
    let words = tokenize(text);

    // word -> (position of first occurrence, occurrences)
    let mut freq: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, word) in words.into_iter().enumerate() {
        freq.entry(word).or_insert((pos, 0)).1 += 1;
    }

    let best = freq
        .into_iter()
        .max_by(|(_, (pos_a, count_a)), (_, (pos_b, count_b))| {
            count_a.cmp(count_b).then(pos_b.cmp(pos_a))
        });

    match best {
        Some((word, (_, count))) => Report::MostRepeatedWord {
            word: word.to_string(),
            count,
        },
        None => Report::MostRepeatedWord {
            word: String::new(),
            count: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert_eq, proptest};

    #[test]
    fn parses_known_names() {
        assert_eq!("wordCount".parse::<Strategy>().unwrap(), Strategy::WordCount);
        assert_eq!(
            "MostRepeatedWords".parse::<Strategy>().unwrap(),
            Strategy::MostRepeatedWord
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "bogus".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(ref name) if name == "bogus"));
        // names are case-sensitive
        assert!("wordcount".parse::<Strategy>().is_err());
        assert!("MostRepeatedWord".parse::<Strategy>().is_err());
    }

    #[test]
    fn name_round_trips_through_from_str() {
        for strategy in [Strategy::WordCount, Strategy::MostRepeatedWord] {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn word_count_report() {
        let report = Strategy::WordCount.analyze("the quick  brown\nfox");
        assert_eq!(report, Report::WordCount { count: 4 });
        assert_eq!(report.to_string(), "Кількість слів: 4");
    }

    #[test]
    fn word_count_of_blank_text_is_zero() {
        assert_eq!(Strategy::WordCount.analyze(""), Report::WordCount { count: 0 });
        assert_eq!(
            Strategy::WordCount.analyze("   \n\t "),
            Report::WordCount { count: 0 }
        );
    }

    #[test]
    fn most_repeated_unique_maximum() {
        let report = Strategy::MostRepeatedWord.analyze("a b a c a b");
        assert_eq!(
            report,
            Report::MostRepeatedWord {
                word: "a".to_string(),
                count: 3
            }
        );
        assert_eq!(report.to_string(), "Most repeated word: a (repeated 3 times)");
    }

    #[test]
    fn most_repeated_ties_go_to_first_occurrence() {
        assert_eq!(
            Strategy::MostRepeatedWord.analyze("a b c"),
            Report::MostRepeatedWord {
                word: "a".to_string(),
                count: 1
            }
        );
        assert_eq!(
            Strategy::MostRepeatedWord.analyze("z y y z x x"),
            Report::MostRepeatedWord {
                word: "z".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn most_repeated_is_case_and_punctuation_sensitive() {
        assert_eq!(
            Strategy::MostRepeatedWord.analyze("Word word, word word"),
            Report::MostRepeatedWord {
                word: "word".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn most_repeated_of_empty_text_uses_empty_defaults() {
        assert_eq!(
            Strategy::MostRepeatedWord.analyze(""),
            Report::MostRepeatedWord {
                word: String::new(),
                count: 0
            }
        );
    }

    #[test]
    fn word_count_covers_every_whitespace_kind() {
        let text = "a\rb\x0cc\x0bd\u{a0}e\u{2028}f\u{85}g";
        assert_eq!(Strategy::WordCount.analyze(text), Report::WordCount { count: 7 });
    }

    #[test]
    fn most_repeated_of_blank_text_uses_empty_defaults() {
        let report = Strategy::MostRepeatedWord.analyze(" \n ");
        assert_eq!(
            report,
            Report::MostRepeatedWord {
                word: String::new(),
                count: 0
            }
        );
        assert_eq!(report.to_string(), "Most repeated word:  (repeated 0 times)");
    }

    proptest! {
        #[test]
        fn word_count_matches_token_count(text in any::<String>()) {
            let report = Strategy::WordCount.analyze(&text);
            prop_assert_eq!(report, Report::WordCount { count: tokenize(&text).len() });
        }
    }
}
