use crate::random;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BUILTIN_WORDS: &[&str] = &[
    "about", "account", "across", "addition", "adjustment", "advertisement", "after", "again",
    "against", "agreement", "almost", "among", "amount", "amusement", "angle", "angry",
    "animal", "answer", "apparatus", "apple", "approval", "argument", "attack", "attempt",
    "attention", "attraction", "authority", "automatic", "awake", "balance", "basket",
    "beautiful", "because", "behavior", "belief", "berry", "between", "birth", "bitter",
    "blade", "board", "boiling", "bottle", "brain", "brake", "branch", "brass", "bread",
    "breath", "brick", "bridge", "bright", "broken", "brother", "brush", "bucket", "building",
    "burst", "business", "butter", "button", "camera", "canvas", "carriage", "cause",
    "certain", "chain", "chalk", "chance", "change", "cheese", "chemical", "chest", "chief",
    "church", "circle", "clean", "clear", "clock", "cloud", "collar", "colour", "comfort",
    "committee", "common", "company", "comparison", "competition", "complete", "complex",
    "condition", "connection", "control", "copper", "cotton", "country", "credit", "crime",
    "curtain", "cushion", "damage", "danger", "daughter", "decision", "degree", "design",
    "desire", "destruction", "detail", "development", "digestion", "direction", "discovery",
    "discussion", "disease", "distance", "distribution", "division", "drawer", "driving",
    "early", "earth", "education", "effect", "electric", "engine", "equal", "error", "event",
    "every", "example", "exchange", "existence", "expansion", "experience", "expert",
    "feather", "feeling", "fiction", "field", "flight", "flower", "foolish", "force",
    "frame", "frequent", "friend", "future", "garden", "general", "glove", "government",
    "grain", "grass", "great", "group", "growth", "guide", "hammer", "harbor", "harmony",
    "healthy", "hearing", "history", "hollow", "humor", "important", "impulse", "increase",
    "industry", "insect", "instrument", "insurance", "interest", "invention", "island",
    "journey", "judge", "kettle", "knowledge", "language", "learning", "letter", "level",
    "library", "lightning", "liquid", "machine", "manager", "market", "material", "measure",
    "medical", "memory", "middle", "military", "minute", "mixed", "monkey", "morning",
    "mountain", "movement", "muscle", "music", "narrow", "nation", "natural", "necessary",
    "needle", "network", "number", "observation", "office", "opinion", "orange", "organization",
    "ornament", "oven", "owner", "paint", "paper", "parallel", "passage", "pencil", "person",
    "picture", "pleasure", "pocket", "poison", "police", "porter", "possible", "potato",
    "powder", "present", "print", "prison", "private", "process", "produce", "profit",
    "property", "protest", "public", "punishment", "purpose", "quality", "question", "quiet",
    "railway", "reaction", "reading", "reason", "receipt", "record", "regret", "relation",
    "religion", "representative", "request", "respect", "responsible", "reward", "rhythm",
    "river", "science", "scissors", "secretary", "selection", "separate", "serious",
    "servant", "shelf", "signal", "silver", "sister", "society", "soldier", "solution",
    "sponge", "station", "statement", "stomach", "story", "straight", "strange", "street",
    "stretch", "structure", "substance", "sudden", "summer", "support", "surprise", "system",
    "teaching", "tendency", "theory", "thought", "thread", "thunder", "ticket", "transport",
    "trouble", "umbrella", "vessel", "violent", "waiting", "weather", "whistle", "window",
    "winter", "wrong", "yellow", "yesterday",
];

#[derive(Debug, Error)]
pub enum WordBankError
{
    #[error("failed to read word list {}: {source}", .path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid word '{word}' on line {line}: only letters a-z are allowed")]
    InvalidWord
    {
        line: usize,
        word: String,
    },
    #[error("invalid word '{word}' at position {index}: only letters a-z are allowed")]
    InvalidEntry
    {
        index: usize,
        word: String,
    },
    #[error("word list contains no words")]
    Empty,
}

/// Candidate secret words. Never empty, and every word is made of `a`-`z` only.
#[derive(Clone, Debug)]
pub struct WordBank
{
    words: Vec<String>,
}

impl WordBank
{
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Vec::new();
        for (idx, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            let normalized = normalize_word(word).ok_or_else(|| WordBankError::InvalidEntry {
                index: idx,
                word: word.trim().to_string(),
            })?;
            bank.push(normalized);
        }
        Self::from_words(bank)
    }

    /// Parses a word list: one word per line, blank lines and `#` comments skipped.
    pub fn parse(text: &str) -> Result<Self, WordBankError>
    {
        let mut words = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let word = normalize_word(trimmed).ok_or_else(|| WordBankError::InvalidWord {
                line: idx + 1,
                word: trimmed.to_string(),
            })?;
            words.push(word);
        }
        Self::from_words(words)
    }

    pub fn from_file(path: &Path) -> Result<Self, WordBankError>
    {
        let text = fs::read_to_string(path).map_err(|source| WordBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::parse(&text)?;
        tracing::info!(path = %path.display(), words = bank.len(), "loaded word list");
        Ok(bank)
    }

    fn from_words(words: Vec<String>) -> Result<Self, WordBankError>
    {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize
    {
        self.words.len()
    }

    pub fn words(&self) -> &[String]
    {
        &self.words
    }

    pub fn pick<R>(&self, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        // `from_words` rejects empty banks, so the fallback is never taken.
        random::choose(&self.words, rng).map_or(BUILTIN_WORDS[0], String::as_str)
    }
}

fn normalize_word(raw: &str) -> Option<String>
{
    let word = raw.trim().to_ascii_lowercase();
    if word.is_empty() || !word.chars().all(|ch| ch.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}
