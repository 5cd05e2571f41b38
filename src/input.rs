//! Scancode translation. Codes are PC/XT set 1 make codes, the same values a
//! keyboard controller hands out on port 0x60.

use crate::snake::Direction;

pub const NO_KEY: u8 = 0;

pub const SCANCODE_ESC: u8 = 0x01;
pub const SCANCODE_BACKSPACE: u8 = 0x0E;
pub const SCANCODE_TAB: u8 = 0x0F;
pub const SCANCODE_W: u8 = 0x11;
pub const SCANCODE_ENTER: u8 = 0x1C;
pub const SCANCODE_A: u8 = 0x1E;
pub const SCANCODE_S: u8 = 0x1F;
pub const SCANCODE_D: u8 = 0x20;
pub const SCANCODE_SPACE: u8 = 0x39;

// Letter rows of a US layout and the make code of each row's first key.
const KEY_ROWS: [(&str, u8); 4] = [
    ("1234567890", 0x02),
    ("qwertyuiop", 0x10),
    ("asdfghjkl", 0x1E),
    ("zxcvbnm", 0x2C),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Steer(Direction),
    TogglePause,
    /// Anything else; only good for leaving the menu or the game-over screen.
    Any,
}

/// `None` for [`NO_KEY`], otherwise what the code means during play.
pub fn translate(code: u8) -> Option<Action> {
    let action = match code {
        NO_KEY => return None,
        SCANCODE_W => Action::Steer(Direction::Up),
        SCANCODE_S => Action::Steer(Direction::Down),
        SCANCODE_A => Action::Steer(Direction::Left),
        SCANCODE_D => Action::Steer(Direction::Right),
        SCANCODE_SPACE => Action::TogglePause,
        _ => Action::Any,
    };
    Some(action)
}

/// Make code for a printable key, case-insensitive.
pub fn scancode_for_char(ch: char) -> Option<u8> {
    if ch == ' ' {
        return Some(SCANCODE_SPACE);
    }
    let ch = ch.to_ascii_lowercase();
    KEY_ROWS.iter().find_map(|(row, first)| {
        row.chars()
            .position(|key| key == ch)
            .map(|offset| first + offset as u8)
    })
}

/// Where raw scancodes come from.
pub trait KeySource {
    /// At most one pending code, or [`NO_KEY`].
    fn poll_key(&mut self) -> u8;
}
