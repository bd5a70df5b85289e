use crate::farewell::farewell_text;
use crate::game::{GuessOutcome, Round, RoundStatus, alphabet};
use crate::roster::{LanguageRoster, Rgb};
use crate::words::WordBank;
use rand::Rng;

pub const TITLE: &str = "Assembly Endgame";
const WIN_TITLE: &str = "You win!";
const WIN_MESSAGE: &str = "Well done! 🎉";
const LOSS_TITLE: &str = "Game over!";
const BLANK_TOKEN: &str = "blank";

pub struct Chip
{
    pub name: &'static str,
    pub background: Rgb,
    pub color: Rgb,
    pub lost: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Slot
{
    /// Uppercase letter when revealed.
    pub letter: Option<char>,
    /// Revealed only because the round was lost.
    pub missed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState
{
    Unused,
    Correct,
    Wrong,
}

pub struct Key
{
    pub letter: char,
    pub state: KeyState,
    pub guessed: bool,
    pub disabled: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Banner
{
    Empty,
    Farewell(String),
    Won
    {
        title: &'static str,
        message: &'static str,
    },
    Lost
    {
        title: &'static str,
        message: String,
    },
}

/// Plain-text narration of the round for screen readers.
pub struct Announcement
{
    /// Absent until the first letter is guessed.
    pub last_guess: Option<String>,
    pub current_word: String,
}

pub struct Screen
{
    pub instructions: String,
    pub banner: Banner,
    pub chips: Vec<Chip>,
    pub slots: Vec<Slot>,
    pub announcement: Announcement,
    pub keys: Vec<Key>,
    pub show_new_game: bool,
}

/// Owns the round being played and turns it into a `Screen` after every event.
pub struct GameView<R>
{
    bank: WordBank,
    roster: LanguageRoster,
    round: Round,
    rng: R,
    farewell: Option<String>,
}

impl<R> GameView<R>
where
    R: Rng,
{
    pub fn new(bank: WordBank, roster: LanguageRoster, mut rng: R) -> Self
    {
        let round = Round::start(&bank, &roster, &mut rng);
        Self {
            bank,
            roster,
            round,
            rng,
            farewell: None,
        }
    }

    pub fn round(&self) -> &Round
    {
        &self.round
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome
    {
        let outcome = self.round.guess(letter);
        match outcome {
            GuessOutcome::Wrong => {
                let wrong = self.round.wrong_guess_count();
                self.farewell = self
                    .roster
                    .lost_by(wrong)
                    .map(|lang| farewell_text(lang.name, &mut self.rng));
            }
            GuessOutcome::Correct => self.farewell = None,
            GuessOutcome::Won | GuessOutcome::Lost => {
                self.farewell = None;
                tracing::info!(
                    word = self.round.word(),
                    won = self.round.is_won(),
                    guesses = self.round.guessed_letters().len(),
                    "round finished"
                );
            }
            GuessOutcome::Ignored(reason) => {
                tracing::debug!(%letter, ?reason, "guess ignored");
            }
        }
        outcome
    }

    pub fn reset(&mut self)
    {
        self.round.reset(&self.bank, &mut self.rng);
        self.farewell = None;
    }

    pub fn screen(&self) -> Screen
    {
        let round = &self.round;
        let wrong = round.wrong_guess_count();

        let chips = self
            .roster
            .iter()
            .map(|(severity, lang)| Chip {
                name: lang.name,
                background: lang.background,
                color: lang.color,
                lost: self.roster.is_lost(severity, wrong),
            })
            .collect();

        let slots = round
            .word()
            .chars()
            .map(|letter| {
                let guessed = round.has_guessed(letter);
                Slot {
                    letter: (guessed || round.is_lost()).then(|| letter.to_ascii_uppercase()),
                    missed: round.is_lost() && !guessed,
                }
            })
            .collect();

        let keys = alphabet()
            .map(|letter| {
                let guessed = round.has_guessed(letter);
                let state = match (guessed, round.in_word(letter)) {
                    (false, _) => KeyState::Unused,
                    (true, true) => KeyState::Correct,
                    (true, false) => KeyState::Wrong,
                };
                Key {
                    letter,
                    state,
                    guessed,
                    disabled: round.is_over(),
                }
            })
            .collect();

        Screen {
            instructions: format!(
                "Guess the word within {} attempts to keep the programming world safe from {}",
                round.guesses_allowed(),
                self.roster.most_severe().name
            ),
            banner: self.banner(),
            chips,
            slots,
            announcement: self.announcement(),
            keys,
            show_new_game: round.is_over(),
        }
    }

    fn banner(&self) -> Banner
    {
        match self.round.status() {
            RoundStatus::Won => Banner::Won {
                title: WIN_TITLE,
                message: WIN_MESSAGE,
            },
            RoundStatus::Lost => Banner::Lost {
                title: LOSS_TITLE,
                message: format!(
                    "You lose! Better start learning {} 😂",
                    self.roster.most_severe().name
                ),
            },
            RoundStatus::InProgress => match &self.farewell {
                Some(text) if self.round.is_last_guess_incorrect() => {
                    Banner::Farewell(text.clone())
                }
                _ => Banner::Empty,
            },
        }
    }

    fn announcement(&self) -> Announcement
    {
        let round = &self.round;
        let last_guess = round.last_guessed_letter().map(|letter| {
            let verdict = if round.in_word(letter) {
                format!("Correct! The letter {letter} is in the word.")
            } else {
                format!("Sorry! The letter {letter} is not in the word.")
            };
            format!("{verdict} You have {} attempts left.", round.guesses_remaining())
        });

        let letters: Vec<String> = round
            .word()
            .chars()
            .map(|letter| {
                if round.has_guessed(letter) {
                    format!("{letter}.")
                } else {
                    format!("{BLANK_TOKEN}.")
                }
            })
            .collect();

        Announcement {
            last_guess,
            current_word: format!("Current word: {}", letters.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::roster::Language;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster_of(len: usize) -> LanguageRoster
    {
        let names = ["HTML", "CSS", "JavaScript", "React", "Assembly"];
        let languages = names[names.len() - len..]
            .iter()
            .copied()
            .map(|name| Language::new(name, Rgb::hex(0x000000), Rgb::hex(0xFFFFFF)))
            .collect();
        LanguageRoster::new(languages).unwrap()
    }

    fn view(word: &str, roster: LanguageRoster) -> GameView<StdRng>
    {
        let bank = WordBank::new([word]).unwrap();
        GameView::new(bank, roster, StdRng::seed_from_u64(21))
    }

    fn lost_chips(screen: &Screen) -> Vec<&str>
    {
        screen
            .chips
            .iter()
            .filter(|chip| chip.lost)
            .map(|chip| chip.name)
            .collect()
    }

    #[test]
    fn fresh_round_shows_blanks_and_no_narration()
    {
        let view = view("cat", LanguageRoster::builtin());
        let screen = view.screen();

        assert_eq!(screen.banner, Banner::Empty);
        assert!(screen.announcement.last_guess.is_none());
        assert_eq!(screen.announcement.current_word, "Current word: blank. blank. blank.");
        assert!(screen.slots.iter().all(|slot| slot.letter.is_none() && !slot.missed));
        assert_eq!(screen.keys.len(), 26);
        assert!(screen.keys.iter().all(|key| key.state == KeyState::Unused && !key.disabled));
        assert!(lost_chips(&screen).is_empty());
        assert!(!screen.show_new_game);
        assert_eq!(
            screen.instructions,
            "Guess the word within 8 attempts to keep the programming world safe from Assembly"
        );
    }

    #[test]
    fn wrong_guess_loses_a_chip_and_says_farewell()
    {
        let mut view = view("cat", LanguageRoster::builtin());
        assert_eq!(view.guess('q'), GuessOutcome::Wrong);
        let screen = view.screen();

        assert_eq!(lost_chips(&screen), ["HTML"]);
        match &screen.banner {
            Banner::Farewell(text) => assert!(text.contains("HTML"), "{text}"),
            other => panic!("expected farewell, got {other:?}"),
        }
        assert_eq!(
            screen.announcement.last_guess.as_deref(),
            Some("Sorry! The letter q is not in the word. You have 7 attempts left.")
        );
        let q = &screen.keys[(b'q' - b'a') as usize];
        assert_eq!(q.state, KeyState::Wrong);
        assert!(q.guessed);
    }

    #[test]
    fn farewell_follows_the_latest_loss()
    {
        let mut view = view("cat", LanguageRoster::builtin());
        view.guess('q');
        view.guess('z');
        match view.screen().banner {
            Banner::Farewell(text) => assert!(text.contains("CSS"), "{text}"),
            other => panic!("expected farewell, got {other:?}"),
        }
    }

    #[test]
    fn correct_guess_clears_farewell_and_reveals_letter()
    {
        let mut view = view("cat", LanguageRoster::builtin());
        view.guess('q');
        assert_eq!(view.guess('a'), GuessOutcome::Correct);
        let screen = view.screen();

        assert_eq!(screen.banner, Banner::Empty);
        assert_eq!(
            screen.slots,
            [
                Slot { letter: None, missed: false },
                Slot { letter: Some('A'), missed: false },
                Slot { letter: None, missed: false },
            ]
        );
        assert_eq!(screen.announcement.current_word, "Current word: blank. a. blank.");
        assert_eq!(
            screen.announcement.last_guess.as_deref(),
            Some("Correct! The letter a is in the word. You have 7 attempts left.")
        );
        assert_eq!(screen.keys[0].state, KeyState::Correct);
    }

    #[test]
    fn loss_reveals_missed_letters_and_disables_keys()
    {
        let mut view = view("cat", roster_of(3));
        view.guess('c');
        view.guess('x');
        assert_eq!(view.guess('z'), GuessOutcome::Lost);
        let screen = view.screen();

        assert_eq!(
            screen.banner,
            Banner::Lost {
                title: "Game over!",
                message: "You lose! Better start learning Assembly 😂".to_string(),
            }
        );
        assert_eq!(
            screen.slots,
            [
                Slot { letter: Some('C'), missed: false },
                Slot { letter: Some('A'), missed: true },
                Slot { letter: Some('T'), missed: true },
            ]
        );
        assert_eq!(lost_chips(&screen), ["JavaScript", "React"]);
        assert!(screen.keys.iter().all(|key| key.disabled));
        assert!(screen.show_new_game);
    }

    #[test]
    fn win_shows_banner_and_new_game()
    {
        let mut view = view("cat", roster_of(3));
        view.guess('x');
        for letter in ['c', 'a', 't'] {
            view.guess(letter);
        }
        let screen = view.screen();

        assert_eq!(view.round().status(), RoundStatus::Won);
        assert_eq!(
            screen.banner,
            Banner::Won {
                title: "You win!",
                message: "Well done! 🎉",
            }
        );
        assert!(screen.slots.iter().all(|slot| slot.letter.is_some() && !slot.missed));
        assert!(screen.show_new_game);
        assert_eq!(view.guess('z'), GuessOutcome::Ignored(crate::game::Ignored::RoundOver));
    }

    #[test]
    fn finished_round_keeps_its_banner()
    {
        let mut view = view("ox", roster_of(2));
        assert_eq!(view.guess('z'), GuessOutcome::Lost);
        assert_eq!(view.guess('o'), GuessOutcome::Ignored(crate::game::Ignored::RoundOver));
        assert_eq!(view.guess('x'), GuessOutcome::Ignored(crate::game::Ignored::RoundOver));

        assert_eq!(view.round().status(), RoundStatus::Lost);
        assert!(matches!(view.screen().banner, Banner::Lost { .. }));
    }

    #[test]
    fn reset_returns_to_a_clean_display()
    {
        let mut view = view("cat", roster_of(3));
        view.guess('x');
        view.guess('z');
        assert!(view.round().is_over());

        view.reset();
        let screen = view.screen();
        assert_eq!(view.round().status(), RoundStatus::InProgress);
        assert_eq!(screen.banner, Banner::Empty);
        assert!(screen.announcement.last_guess.is_none());
        assert!(lost_chips(&screen).is_empty());
        assert!(!screen.show_new_game);
    }
}
