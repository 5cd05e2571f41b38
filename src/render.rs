//! Screens. Every function repaints from scratch; nothing here keeps state.

use crate::snake::Snake;
use crate::surface::{Attr, Surface};
use crate::text::{format_decimal, MAX_DIGITS};
use crate::{Coords, TermInt, BOARD_HEIGHT, BOARD_WIDTH};

pub const PLAYFIELD: Attr = Attr(0xAA);
pub const PAUSED_PLAYFIELD: Attr = Attr(0x22);
pub const BORDER: Attr = Attr(0x77);
pub const SCORE_TEXT: Attr = Attr(0x70);
pub const BANNER_TEXT: Attr = Attr(0x2F);
pub const BODY: Attr = Attr(0x11);
pub const HEAD: Attr = Attr(0x99);
pub const APPLE: Attr = Attr(0xCC);
pub const GAME_OVER_BACKGROUND: Attr = Attr(0x00);
pub const GAME_OVER_TEXT: Attr = Attr(0x0F);

const MID_X: TermInt = BOARD_WIDTH / 2;
const MID_Y: TermInt = BOARD_HEIGHT / 2;

const MENU_LINES: [(&str, TermInt, TermInt); 5] = [
    ("S N A K E", MID_X - 5, MID_Y - 8),
    ("Use WASD keys to control the snake", MID_X - 19, MID_Y - 5),
    ("Avoid borders and yourself", MID_X - 14, MID_Y - 4),
    ("Eat apples to grow", MID_X - 13, MID_Y - 3),
    ("Press any key to start!", MID_X - 14, MID_Y - 2),
];

/// Playfield, border and score. Snake and apple only while not paused.
pub fn draw_board<S: Surface>(surface: &mut S, snake: &Snake, apple: Coords, paused: bool) {
    surface.clear(if paused { PAUSED_PLAYFIELD } else { PLAYFIELD });
    draw_border(surface);

    if paused {
        surface.print("Paused", MID_X - 5, MID_Y - 1, BANNER_TEXT);
        surface.print("Press Space to resume", MID_X - 12, MID_Y + 1, BANNER_TEXT);
    }

    surface.print("Score:", 1, 0, SCORE_TEXT);
    let mut digits = [0; MAX_DIGITS];
    surface.print(format_decimal(snake.score(), &mut digits), 8, 0, SCORE_TEXT);

    if !paused {
        for (x, y) in snake.trail().body() {
            surface.put_cell(x, y, ' ', BODY);
        }
        let (x, y) = snake.head();
        surface.put_cell(x, y, ' ', HEAD);
        surface.put_cell(apple.0, apple.1, ' ', APPLE);
    }
}

pub fn draw_game_over<S: Surface>(surface: &mut S, score: u64) {
    surface.clear(GAME_OVER_BACKGROUND);
    surface.print("Game over!", MID_X - 8, MID_Y - 1, GAME_OVER_TEXT);
    surface.print("Your score:", MID_X - 9, MID_Y, GAME_OVER_TEXT);
    let mut digits = [0; MAX_DIGITS];
    surface.print(format_decimal(score, &mut digits), MID_X + 3, MID_Y, GAME_OVER_TEXT);
    surface.print("Press any key to retry", MID_X - 14, MID_Y + 2, GAME_OVER_TEXT);
}

pub fn draw_menu<S: Surface>(surface: &mut S) {
    surface.clear(PAUSED_PLAYFIELD);
    for (line, x, y) in MENU_LINES.iter() {
        surface.print(line, *x, *y, BANNER_TEXT);
    }
    surface.print("Space pauses the game", 0, BOARD_HEIGHT - 1, BANNER_TEXT);

    // Frame around the title block.
    let (left, right) = (MID_X - 21, MID_X + 15);
    for x in left..=right {
        surface.put_cell(x, MID_Y - 9, ' ', BORDER);
        surface.put_cell(x, MID_Y - 1, ' ', BORDER);
    }
    for y in MID_Y - 8..MID_Y - 1 {
        surface.put_cell(left, y, ' ', BORDER);
        surface.put_cell(right, y, ' ', BORDER);
    }
}

fn draw_border<S: Surface>(surface: &mut S) {
    for x in 0..BOARD_WIDTH {
        surface.put_cell(x, 0, ' ', BORDER);
        surface.put_cell(x, BOARD_HEIGHT - 1, ' ', BORDER);
    }
    for y in 1..BOARD_HEIGHT - 1 {
        surface.put_cell(0, y, ' ', BORDER);
        surface.put_cell(BOARD_WIDTH - 1, y, ' ', BORDER);
    }
}
