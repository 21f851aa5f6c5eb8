use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
	Negative,
	Neutral,
	Positive,
	#[default]
	Unknown,
}

impl Sentiment {
	pub fn from_score(score: Option<i64>) -> Self {
		match score {
			Some(score) if score < 0 => Sentiment::Negative,
			Some(0) => Sentiment::Neutral,
			Some(_) => Sentiment::Positive,
			None => Sentiment::Unknown,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Sentiment::Negative => "negative",
			Sentiment::Neutral => "neutral",
			Sentiment::Positive => "positive",
			Sentiment::Unknown => "unknown",
		}
	}
}

impl Display for Sentiment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

// Column values outside the four labels read back as `Unknown`.
impl From<String> for Sentiment {
	fn from(value: String) -> Self {
		match value.as_str() {
			"negative" => Sentiment::Negative,
			"neutral" => Sentiment::Neutral,
			"positive" => Sentiment::Positive,
			_ => Sentiment::Unknown,
		}
	}
}

/// Scores message text. Implementations must be pure: the same text always
/// yields the same score.
pub trait SentimentClassifier: Send + Sync {
	/// `None` when the text carries nothing to score.
	fn score(&self, text: &str) -> Option<i64>;

	fn classify(&self, text: &str) -> Sentiment {
		Sentiment::from_score(self.score(text))
	}
}

const POSITIVE_WORDS: &[&str] = &[
	"amazing", "appreciate", "awesome", "best", "better", "clear", "excellent", "fantastic", "fun", "glad", "good", "great",
	"happy", "helpful", "interesting", "kind", "like", "love", "nice", "patient", "perfect", "thank", "thanks", "useful",
	"wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
	"angry", "annoying", "awful", "bad", "boring", "confusing", "difficult", "disappointed", "dislike", "hard", "hate",
	"horrible", "poor", "rude", "sad", "terrible", "unclear", "unfair", "unhelpful", "upset", "useless", "worse", "worst",
];

const NEGATORS: &[&str] = &["not", "no", "never", "dont", "don't", "isnt", "isn't", "wasnt", "wasn't", "cannot", "can't"];

/// Word-list scorer: +1 per positive word, -1 per negative word, with a
/// negator flipping the polarity of the word right after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl SentimentClassifier for LexiconClassifier {
	fn score(&self, text: &str) -> Option<i64> {
		let words: Vec<String> = text
			.split(|c: char| !(c.is_alphabetic() || c == '\''))
			.map(|word| word.trim_matches('\'').to_lowercase())
			.filter(|word| !word.is_empty())
			.collect();
		if words.is_empty() {
			return None;
		}

		let mut score = 0;
		let mut negated = false;
		for word in &words {
			let polarity = if POSITIVE_WORDS.contains(&word.as_str()) {
				1
			} else if NEGATIVE_WORDS.contains(&word.as_str()) {
				-1
			} else {
				0
			};
			score += if negated { -polarity } else { polarity };
			negated = NEGATORS.contains(&word.as_str());
		}
		Some(score)
	}
}

#[cfg(test)]
mod test {
	use super::{LexiconClassifier, Sentiment, SentimentClassifier};

	#[test]
	fn test_bucketing() {
		assert_eq!(Sentiment::from_score(Some(-3)), Sentiment::Negative);
		assert_eq!(Sentiment::from_score(Some(0)), Sentiment::Neutral);
		assert_eq!(Sentiment::from_score(Some(2)), Sentiment::Positive);
		assert_eq!(Sentiment::from_score(None), Sentiment::Unknown);
	}

	#[test]
	fn test_lexicon_labels() {
		let classifier = LexiconClassifier;
		assert_eq!(classifier.classify("I love this class, great job!"), Sentiment::Positive);
		assert_eq!(classifier.classify("The homework was terrible and I hate it"), Sentiment::Negative);
		assert_eq!(classifier.classify("Test String"), Sentiment::Neutral);
		assert_eq!(classifier.classify("?!? 1234"), Sentiment::Unknown);
	}

	#[test]
	fn test_negator_flips_next_word() {
		let classifier = LexiconClassifier;
		assert_eq!(classifier.score("not good"), Some(-1));
		assert_eq!(classifier.score("it wasn't bad"), Some(1));
		assert_eq!(classifier.score("not really good"), Some(1));
	}

	#[test]
	fn test_label_is_stable() {
		let classifier = LexiconClassifier;
		let text = "Lectures are helpful but the labs are confusing and boring";
		let first = classifier.classify(text);
		for _ in 0..10 {
			assert_eq!(classifier.classify(text), first);
		}
	}

	#[test]
	fn test_unrecognised_column_value_reads_as_unknown() {
		assert_eq!(Sentiment::from("positive".to_string()), Sentiment::Positive);
		assert_eq!(Sentiment::from("meh".to_string()), Sentiment::Unknown);
		assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
	}
}
