use crate::roster::LanguageRoster;
use crate::words::WordBank;
use rand::Rng;

/// Letters a guess may use, in keyboard order.
pub fn alphabet() -> impl Iterator<Item = char>
{
    'a'..='z'
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus
{
    InProgress,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored
{
    RoundOver,
    NotALetter,
    AlreadyGuessed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome
{
    Correct,
    Wrong,
    Won,
    Lost,
    Ignored(Ignored),
}

/// One play-through: a secret word and the letters guessed so far.
///
/// `guessed` keeps guess order and never holds duplicates. Once the round is
/// won or lost it only changes through `reset`.
#[derive(Clone, Debug)]
pub struct Round
{
    word: String,
    guessed: Vec<char>,
    guesses_allowed: usize,
    status: RoundStatus,
}

impl Round
{
    pub fn new(word: impl Into<String>, guesses_allowed: usize) -> Self
    {
        Self {
            word: word.into(),
            guessed: Vec::new(),
            guesses_allowed,
            status: RoundStatus::InProgress,
        }
    }

    pub fn start<R>(bank: &WordBank, roster: &LanguageRoster, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let round = Self::new(bank.pick(rng), roster.guesses_allowed());
        tracing::info!(letters = round.word.len(), "round started");
        round
    }

    pub fn reset<R>(&mut self, bank: &WordBank, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.word = bank.pick(rng).to_string();
        self.guessed.clear();
        self.status = RoundStatus::InProgress;
        tracing::info!(letters = self.word.len(), "round reset");
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome
    {
        if self.is_over() {
            return GuessOutcome::Ignored(Ignored::RoundOver);
        }
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Ignored(Ignored::NotALetter);
        }
        if self.has_guessed(letter) {
            return GuessOutcome::Ignored(Ignored::AlreadyGuessed);
        }

        self.guessed.push(letter);

        // Win is decided by membership alone, before the wrong-guess limit.
        let outcome = if self.word.chars().all(|ch| self.has_guessed(ch)) {
            self.status = RoundStatus::Won;
            GuessOutcome::Won
        } else if self.wrong_guess_count() >= self.guesses_allowed {
            self.status = RoundStatus::Lost;
            GuessOutcome::Lost
        } else if self.in_word(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        tracing::debug!(%letter, ?outcome, wrong = self.wrong_guess_count(), "guess applied");
        outcome
    }

    pub fn word(&self) -> &str
    {
        &self.word
    }

    pub fn guessed_letters(&self) -> &[char]
    {
        &self.guessed
    }

    pub fn status(&self) -> RoundStatus
    {
        self.status
    }

    pub fn has_guessed(&self, letter: char) -> bool
    {
        self.guessed.contains(&letter)
    }

    pub fn in_word(&self, letter: char) -> bool
    {
        self.word.contains(letter)
    }

    pub fn guesses_allowed(&self) -> usize
    {
        self.guesses_allowed
    }

    pub fn wrong_guess_count(&self) -> usize
    {
        self.guessed
            .iter()
            .filter(|letter| !self.in_word(**letter))
            .count()
    }

    pub fn guesses_remaining(&self) -> usize
    {
        self.guesses_allowed.saturating_sub(self.wrong_guess_count())
    }

    pub fn is_won(&self) -> bool
    {
        self.status == RoundStatus::Won
    }

    pub fn is_lost(&self) -> bool
    {
        self.status == RoundStatus::Lost
    }

    pub fn is_over(&self) -> bool
    {
        self.status != RoundStatus::InProgress
    }

    pub fn last_guessed_letter(&self) -> Option<char>
    {
        self.guessed.last().copied()
    }

    /// The latest guess missed and the round is still being played.
    pub fn is_last_guess_incorrect(&self) -> bool
    {
        !self.is_over()
            && self
                .last_guessed_letter()
                .is_some_and(|letter| !self.in_word(letter))
    }
}
