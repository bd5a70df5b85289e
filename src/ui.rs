use crate::roster::{DARK_TEXT, LIGHT_TEXT, Rgb};
use crate::view::{Banner, Chip, GameView, Key, KeyState, Screen, Slot, TITLE};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use rand::Rng;
use std::io::{self, Stdout, Write};

const KEYS_PER_ROW: usize = 13;
const RESET: &str = "\x1b[0m";
const WON_BG: Rgb = Rgb::hex(0x10A95B);
const LOST_BG: Rgb = Rgb::hex(0xBA2A2A);
const FAREWELL_BG: Rgb = Rgb::hex(0x7A5EA7);
const CORRECT_BG: Rgb = Rgb::hex(0x10A95B);
const WRONG_BG: Rgb = Rgb::hex(0xEC5D49);
const KEY_BG: Rgb = Rgb::hex(0xFCBA29);
const SLOT_BG: Rgb = Rgb::hex(0x323232);
const MISSED_FG: Rgb = Rgb::hex(0xEC5D49);
const MUTED: Rgb = Rgb::hex(0x5C5C5C);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action
{
    Guess(char),
    NewGame,
    Quit,
}

struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Plays rounds until the player quits, redrawing after every key press.
pub fn run<R>(view: &mut GameView<R>) -> io::Result<()>
where
    R: Rng,
{
    let mut term = TerminalGuard::enter()?;
    draw(term.stdout(), &view.screen())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match action_for(key, view.round().is_over()) {
            Some(Action::Quit) => break,
            Some(Action::NewGame) => view.reset(),
            Some(Action::Guess(letter)) => {
                view.guess(letter);
            }
            None => continue,
        }
        draw(term.stdout(), &view.screen())?;
    }

    tracing::info!("player quit");
    Ok(())
}

/// Maps a key press to a game action. New game is only offered once the round is over.
pub fn action_for(key: KeyEvent, round_over: bool) -> Option<Action>
{
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') if round_over => Some(Action::NewGame),
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() && !round_over => {
            Some(Action::Guess(ch.to_ascii_lowercase()))
        }
        _ => None,
    }
}

fn draw(stdout: &mut Stdout, screen: &Screen) -> io::Result<()>
{
    let output = format!("{}\r\n", render_lines(screen).join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}

pub fn render_lines(screen: &Screen) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push(TITLE.to_string());
    lines.push(screen.instructions.clone());
    lines.push(String::new());

    lines.extend(render_banner(&screen.banner));
    lines.push(String::new());

    lines.push(render_chips(&screen.chips));
    lines.push(String::new());
    lines.push(render_slots(&screen.slots));
    lines.push(String::new());

    for row in screen.keys.chunks(KEYS_PER_ROW) {
        lines.push(render_keys(row));
    }
    lines.push(String::new());

    if let Some(sentence) = &screen.announcement.last_guess {
        lines.push(paint_fg(MUTED, sentence));
    }
    lines.push(paint_fg(MUTED, &screen.announcement.current_word));
    lines.push(String::new());

    if screen.show_new_game {
        lines.push("New game: press Enter or Space. Esc quits.".to_string());
    } else {
        lines.push("Type a letter to guess. Esc quits.".to_string());
    }
    lines
}

fn render_banner(banner: &Banner) -> Vec<String>
{
    match banner {
        Banner::Empty => vec![String::new()],
        Banner::Farewell(text) => vec![paint(FAREWELL_BG, LIGHT_TEXT, &format!(" {text} "))],
        Banner::Won { title, message } => vec![
            paint(WON_BG, LIGHT_TEXT, &format!(" {title} ")),
            paint(WON_BG, LIGHT_TEXT, &format!(" {message} ")),
        ],
        Banner::Lost { title, message } => vec![
            paint(LOST_BG, LIGHT_TEXT, &format!(" {title} ")),
            paint(LOST_BG, LIGHT_TEXT, &format!(" {message} ")),
        ],
    }
}

fn render_chips(chips: &[Chip]) -> String
{
    chips
        .iter()
        .map(|chip| {
            let label = format!(" {} ", chip.name);
            if chip.lost {
                // dim + strikethrough
                format!("\x1b[2;9m{}", paint(MUTED, DARK_TEXT, &label))
            } else {
                paint(chip.background, chip.color, &label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_slots(slots: &[Slot]) -> String
{
    slots
        .iter()
        .map(|slot| match slot.letter {
            Some(letter) if slot.missed => paint(SLOT_BG, MISSED_FG, &format!(" {letter} ")),
            Some(letter) => paint(SLOT_BG, LIGHT_TEXT, &format!(" {letter} ")),
            None => paint(SLOT_BG, LIGHT_TEXT, "   "),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_keys(keys: &[Key]) -> String
{
    keys.iter()
        .map(|key| {
            let label = format!(" {} ", key.letter.to_ascii_uppercase());
            let bg = match key.state {
                KeyState::Correct => CORRECT_BG,
                KeyState::Wrong => WRONG_BG,
                KeyState::Unused if key.disabled => MUTED,
                KeyState::Unused => KEY_BG,
            };
            let painted = paint(bg, DARK_TEXT, &label);
            if key.guessed {
                format!("\x1b[1m{painted}")
            } else {
                painted
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(bg: Rgb, fg: Rgb, text: &str) -> String
{
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}{}",
        bg.r, bg.g, bg.b, fg.r, fg.g, fg.b, text, RESET
    )
}

fn paint_fg(fg: Rgb, text: &str) -> String
{
    format!("\x1b[38;2;{};{};{}m{}{}", fg.r, fg.g, fg.b, text, RESET)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::roster::LanguageRoster;
    use crate::words::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(code: KeyCode) -> KeyEvent
    {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn strip_ansi(line: &str) -> String
    {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn letters_guess_only_while_playing()
    {
        assert_eq!(action_for(press(KeyCode::Char('Q')), false), Some(Action::Guess('q')));
        assert_eq!(action_for(press(KeyCode::Char('q')), true), None);
        assert_eq!(action_for(press(KeyCode::Char('7')), false), None);
    }

    #[test]
    fn new_game_only_once_over()
    {
        assert_eq!(action_for(press(KeyCode::Enter), true), Some(Action::NewGame));
        assert_eq!(action_for(press(KeyCode::Char(' ')), true), Some(Action::NewGame));
        assert_eq!(action_for(press(KeyCode::Enter), false), None);
    }

    #[test]
    fn modified_letters_are_not_guesses()
    {
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let key = KeyEvent::new(KeyCode::Char('x'), modifiers);
            assert_eq!(action_for(key, false), None);
        }
        let alt_space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT);
        assert_eq!(action_for(alt_space, true), None);
        let shifted = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(action_for(shifted, false), Some(Action::Guess('x')));
    }

    #[test]
    fn escape_and_ctrl_c_quit()
    {
        assert_eq!(action_for(press(KeyCode::Esc), false), Some(Action::Quit));
        for round_over in [false, true] {
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(action_for(ctrl_c, round_over), Some(Action::Quit));
        }
    }

    #[test]
    fn chips_and_slots_use_roster_text_colors()
    {
        let roster = LanguageRoster::builtin();
        let html = roster.get(0).unwrap();
        let chip = Chip {
            name: html.name,
            background: html.background,
            color: html.color,
            lost: false,
        };
        let light = format!("\x1b[38;2;{};{};{}m", LIGHT_TEXT.r, LIGHT_TEXT.g, LIGHT_TEXT.b);
        assert_eq!(html.color, LIGHT_TEXT);
        assert!(render_chips(&[chip]).contains(&light));

        let slot = Slot { letter: Some('A'), missed: false };
        assert!(render_slots(&[slot]).contains(&light));
    }

    #[test]
    fn rendered_screen_shows_round_state()
    {
        let bank = WordBank::new(["cat"]).unwrap();
        let mut view = GameView::new(bank, LanguageRoster::builtin(), StdRng::seed_from_u64(2));
        view.guess('a');
        let lines: Vec<String> = render_lines(&view.screen())
            .iter()
            .map(|line| strip_ansi(line))
            .collect();

        assert_eq!(lines[0], TITLE);
        assert!(lines.iter().any(|line| line.contains(" HTML ") && line.contains(" Assembly ")));
        assert!(lines.iter().any(|line| line == "     A     "));
        assert!(lines.iter().any(|line| line.starts_with(" A ") && line.ends_with(" M ")));
        assert!(lines.iter().any(|line| line == "Current word: blank. a. blank."));
        assert_eq!(lines.last().map(String::as_str), Some("Type a letter to guess. Esc quits."));
    }

    #[test]
    fn finished_round_offers_new_game()
    {
        let bank = WordBank::new(["ox"]).unwrap();
        let mut view = GameView::new(bank, LanguageRoster::builtin(), StdRng::seed_from_u64(2));
        view.guess('o');
        view.guess('x');
        let lines: Vec<String> = render_lines(&view.screen())
            .iter()
            .map(|line| strip_ansi(line))
            .collect();

        assert!(lines.iter().any(|line| line == " You win! "));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("New game: press Enter or Space. Esc quits.")
        );
    }
}
