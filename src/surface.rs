use crate::{Coords, TermInt, BOARD_HEIGHT, BOARD_WIDTH};

/// VGA text-mode attribute: background in the high nibble, foreground in the
/// low one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attr(pub u8);

impl Attr {
    pub fn fg(self) -> u8 {
        self.0 & 0x0F
    }

    pub fn bg(self) -> u8 {
        self.0 >> 4
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
}

impl Cell {
    pub fn blank(attr: Attr) -> Self {
        Cell { ch: ' ', attr }
    }
}

/// A character-cell screen the game writes to. Writes cannot fail.
pub trait Surface {
    fn clear(&mut self, color: Attr);

    fn put_cell(&mut self, x: TermInt, y: TermInt, ch: char, color: Attr);

    fn print(&mut self, text: &str, x: TermInt, y: TermInt, color: Attr) {
        for (i, ch) in text.chars().enumerate() {
            self.put_cell(x.saturating_add(i as TermInt), y, ch, color);
        }
    }
}

/// In-memory board-sized screen. Writes outside the board are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new() -> Self {
        let size = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;
        CellBuffer { cells: vec![Cell::blank(Attr(0x00)); size] }
    }

    pub fn cell(&self, x: TermInt, y: TermInt) -> Option<Cell> {
        index(x, y).map(|i| self.cells[i])
    }

    /// The characters of row `y`, colors dropped.
    pub fn row_text(&self, y: TermInt) -> String {
        (0..BOARD_WIDTH)
            .filter_map(|x| self.cell(x, y))
            .map(|cell| cell.ch)
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        (0..BOARD_HEIGHT).any(|y| self.row_text(y).contains(needle))
    }

    /// Positions whose cell differs from `other`, row by row.
    pub fn changes_since<'a>(&'a self, other: &'a CellBuffer) -> impl Iterator<Item = (Coords, Cell)> + 'a {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(i, (now, _))| (position(i), *now))
    }
}

impl Default for CellBuffer {
    fn default() -> Self {
        CellBuffer::new()
    }
}

impl Surface for CellBuffer {
    fn clear(&mut self, color: Attr) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::blank(color);
        }
    }

    fn put_cell(&mut self, x: TermInt, y: TermInt, ch: char, color: Attr) {
        if let Some(i) = index(x, y) {
            self.cells[i] = Cell { ch, attr: color };
        }
    }
}

fn index(x: TermInt, y: TermInt) -> Option<usize> {
    if x < BOARD_WIDTH && y < BOARD_HEIGHT {
        Some(BOARD_WIDTH as usize * y as usize + x as usize)
    } else {
        None
    }
}

fn position(index: usize) -> Coords {
    let width = BOARD_WIDTH as usize;
    ((index % width) as TermInt, (index / width) as TermInt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_nibbles() {
        assert_eq!(Attr(0x2F).bg(), 0x2);
        assert_eq!(Attr(0x2F).fg(), 0xF);
    }

    #[test]
    fn print_and_read_back() {
        let mut screen = CellBuffer::new();
        screen.clear(Attr(0xAA));
        screen.print("Score:", 1, 0, Attr(0x70));
        assert!(screen.row_text(0).starts_with(" Score: "));
        assert_eq!(screen.cell(1, 0), Some(Cell { ch: 'S', attr: Attr(0x70) }));
        assert_eq!(screen.cell(0, 0), Some(Cell::blank(Attr(0xAA))));
    }

    #[test]
    fn writes_off_the_board_are_dropped() {
        let mut screen = CellBuffer::new();
        let before = screen.clone();
        screen.put_cell(BOARD_WIDTH, 0, 'x', Attr(0x0F));
        screen.put_cell(0, BOARD_HEIGHT, 'x', Attr(0x0F));
        screen.print("overflow", BOARD_WIDTH - 2, 3, Attr(0x0F));
        assert_eq!(screen.cell(BOARD_WIDTH, 0), None);
        assert_eq!(screen.changes_since(&before).count(), 2);
    }

    #[test]
    fn changes_report_positions() {
        let before = CellBuffer::new();
        let mut after = before.clone();
        after.put_cell(3, 2, '#', Attr(0x77));
        let changes: Vec<_> = after.changes_since(&before).collect();
        assert_eq!(changes, [((3, 2), Cell { ch: '#', attr: Attr(0x77) })]);
    }
}
