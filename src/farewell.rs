use crate::random;
use rand::Rng;

const PLACEHOLDER: &str = "{}";

static TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// A random send-off for a language that was just lost.
pub fn farewell_text<R>(language: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let template = random::choose(&TEMPLATES, rng).unwrap_or(&TEMPLATES[0]);
    template.replacen(PLACEHOLDER, language, 1)
}
