#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb
{
    pub const fn hex(value: u32) -> Self
    {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language
{
    pub name: &'static str,
    pub background: Rgb,
    pub color: Rgb,
}

impl Language
{
    pub const fn new(name: &'static str, background: Rgb, color: Rgb) -> Self
    {
        Self {
            name,
            background,
            color,
        }
    }
}

pub const LIGHT_TEXT: Rgb = Rgb::hex(0xF9F4DA);
pub const DARK_TEXT: Rgb = Rgb::hex(0x1E1E1E);

const BUILTIN_LANGUAGES: [Language; 9] = [
    Language::new("HTML", Rgb::hex(0xE2680F), LIGHT_TEXT),
    Language::new("CSS", Rgb::hex(0x328AF1), LIGHT_TEXT),
    Language::new("JavaScript", Rgb::hex(0xF4EB13), DARK_TEXT),
    Language::new("React", Rgb::hex(0x2ED3E9), DARK_TEXT),
    Language::new("TypeScript", Rgb::hex(0x298EC6), LIGHT_TEXT),
    Language::new("Node.js", Rgb::hex(0x599137), LIGHT_TEXT),
    Language::new("Python", Rgb::hex(0xFFD742), DARK_TEXT),
    Language::new("Ruby", Rgb::hex(0xD02B2B), LIGHT_TEXT),
    Language::new("Assembly", Rgb::hex(0x2D519F), LIGHT_TEXT),
];

#[cfg(test)]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError
{
    #[error("a roster needs at least two languages, got {0}")]
    TooShort(usize),
}

/// Languages ordered by severity.
///
/// Position is severity: the language at index 0 is the first one lost, and
/// after `n` wrong guesses exactly the languages at indices `0..n` are lost.
/// The last language is never lost; losing everything before it ends the round.
#[derive(Clone, Debug)]
pub struct LanguageRoster
{
    languages: Vec<Language>,
}

impl LanguageRoster
{
    pub fn builtin() -> Self
    {
        Self {
            languages: BUILTIN_LANGUAGES.to_vec(),
        }
    }

    /// Custom rosters are only built by tests; the game always plays the built-in one.
    #[cfg(test)]
    pub fn new(languages: Vec<Language>) -> Result<Self, RosterError>
    {
        if languages.len() < 2 {
            return Err(RosterError::TooShort(languages.len()));
        }
        Ok(Self { languages })
    }

    pub fn len(&self) -> usize
    {
        self.languages.len()
    }

    /// Wrong guesses a round tolerates before it is lost.
    pub fn guesses_allowed(&self) -> usize
    {
        self.languages.len() - 1
    }

    pub fn get(&self, severity: usize) -> Option<&Language>
    {
        self.languages.get(severity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Language)>
    {
        self.languages.iter().enumerate()
    }

    pub fn is_lost(&self, severity: usize, wrong_guesses: usize) -> bool
    {
        severity < wrong_guesses
    }

    /// The language lost by the most recent of `wrong_guesses` wrong guesses.
    pub fn lost_by(&self, wrong_guesses: usize) -> Option<&Language>
    {
        wrong_guesses.checked_sub(1).and_then(|severity| self.get(severity))
    }

    pub fn most_severe(&self) -> &Language
    {
        &self.languages[self.languages.len() - 1]
    }
}
