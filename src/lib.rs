//! Snake on an 80x25 character-cell screen, driven by raw keyboard scancodes.
//!
//! The game itself never touches a terminal, clock or keyboard directly. It
//! writes cells through [`Surface`], reads scancodes through [`KeySource`] and
//! is seeded once through [`Clock`], so the whole state machine can be stepped
//! tick by tick from a test.

pub mod apple;
pub mod game;
pub mod input;
pub mod render;
pub mod rng;
pub mod snake;
pub mod surface;
pub mod text;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

/// Board width in cells, border included.
pub const BOARD_WIDTH: TermInt = 80;
/// Board height in cells, border included.
pub const BOARD_HEIGHT: TermInt = 25;

pub use game::{Config, Countdown, Game, Phase};
pub use input::{Action, KeySource};
pub use rng::{Clock, Lcg, SystemClock};
pub use snake::{Crash, Direction, MoveResult, Snake, Trail, TRAIL_CAPACITY};
pub use surface::{Attr, CellBuffer, Surface};

/// True if `pos` lies on the one-cell ring around the board.
pub fn on_border(pos: Coords) -> bool {
    pos.0 == 0 || pos.0 >= BOARD_WIDTH - 1 || pos.1 == 0 || pos.1 >= BOARD_HEIGHT - 1
}

/// Center cell of the board, where every round starts.
pub fn board_center() -> Coords {
    (BOARD_WIDTH / 2, BOARD_HEIGHT / 2)
}
