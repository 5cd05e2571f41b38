use rand::RngCore;

use crate::{Coords, TermInt, BOARD_HEIGHT, BOARD_WIDTH};

/// Picks a cell strictly inside the border.
///
/// The snake is not consulted: an apple can land under the body and simply
/// waits there until the head reaches it.
pub fn place_apple<R: RngCore>(rng: &mut R) -> Coords {
    let x = rng.next_u32() % u32::from(BOARD_WIDTH - 2) + 1;
    let y = rng.next_u32() % u32::from(BOARD_HEIGHT - 2) + 1;
    (x as TermInt, y as TermInt)
}
