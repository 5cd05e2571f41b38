use crate::{on_border, Coords, BOARD_HEIGHT, BOARD_WIDTH};
use Direction::*;
use MoveResult::*;

/// Number of past head positions the snake can remember.
pub const TRAIL_CAPACITY: usize = 300;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Maps `0..4` onto Left, Right, Up, Down; larger values wrap.
    pub fn from_index(index: u32) -> Self {
        match index % 4 {
            0 => Left,
            1 => Right,
            2 => Up,
            _ => Down,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    /// The head ran into a body cell.
    Tail,
    /// The head reached the outer ring.
    Border,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_head: Coords },
    Crashed(Crash),
}

/// Fixed-capacity history of head positions, slot 0 being the newest.
///
/// Only the first `len` slots belong to the snake; whatever sits past them is
/// stale and never read as body.
#[derive(Clone, Debug)]
pub struct Trail {
    slots: [Option<Coords>; TRAIL_CAPACITY],
    len: usize,
}

impl Trail {
    pub fn new() -> Self {
        Trail { slots: [None; TRAIL_CAPACITY], len: 1 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn get(&self, index: usize) -> Option<Coords> {
        self.slots.get(index).copied().flatten()
    }

    /// Records a new head in slot 0 and pushes the rest of the window one
    /// slot deeper. The value leaving slot `len - 1` is dropped.
    pub fn push_head(&mut self, head: Coords) {
        let mut carried = Some(head);
        for slot in self.slots[..self.len].iter_mut() {
            carried = std::mem::replace(slot, carried);
        }
    }

    /// Extends the window by one slot. Returns `false` once at capacity.
    pub fn grow(&mut self) -> bool {
        if self.len < TRAIL_CAPACITY {
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Occupied slots behind the head, nearest first.
    pub fn body(&self) -> impl Iterator<Item = Coords> + '_ {
        self.slots[1..self.len].iter().flatten().copied()
    }

    pub fn body_contains(&self, pos: Coords) -> bool {
        self.body().any(|cell| cell == pos)
    }
}

impl Default for Trail {
    fn default() -> Self {
        Trail::new()
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    head: Coords,
    direction: Direction,
    score: u64,
    trail: Trail,
}

impl Snake {
    pub fn new(head: Coords, direction: Direction) -> Self {
        let mut trail = Trail::new();
        trail.push_head(head);
        Snake { head, direction, score: 0, trail }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Reversing is allowed; running back into the body is caught on the
    /// next step instead.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Teleports the head without touching the body. Used to set up rounds
    /// from a known position.
    pub fn place_head(&mut self, head: Coords) {
        self.head = head;
        self.trail.slots[0] = Some(head);
    }

    pub fn move_step(&mut self) -> MoveResult {
        let old_head = self.head;
        let new_head = next_cell(old_head, self.direction);

        self.head = new_head;
        self.trail.push_head(new_head);

        if self.trail.body_contains(new_head) {
            return Crashed(Crash::Tail);
        }
        if on_border(new_head) {
            return Crashed(Crash::Border);
        }

        Moved { new_head, old_head }
    }

    /// Scores an apple and lengthens the body by one. Returns `false` when
    /// the trail is already full and the length stays put.
    pub fn eat(&mut self) -> bool {
        self.score = self.score.saturating_add(1);
        self.trail.grow()
    }
}

/// One cell further in `direction`, clamped to the board so the edges never
/// wrap around; the border check does the rest.
fn next_cell((x, y): Coords, direction: Direction) -> Coords {
    match direction {
        Up => (x, y.saturating_sub(1)),
        Down => (x, y.saturating_add(1).min(BOARD_HEIGHT - 1)),
        Left => (x.saturating_sub(1), y),
        Right => (x.saturating_add(1).min(BOARD_WIDTH - 1), y),
    }
}
