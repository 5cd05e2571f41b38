use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal, ErrorKind};
use textmode_snake::input::{
    scancode_for_char, KeySource, NO_KEY, SCANCODE_A, SCANCODE_BACKSPACE, SCANCODE_D,
    SCANCODE_ENTER, SCANCODE_ESC, SCANCODE_S, SCANCODE_TAB, SCANCODE_W,
};
use textmode_snake::surface::{Attr, Cell, CellBuffer, Surface};
use textmode_snake::{TermInt, BOARD_HEIGHT, BOARD_WIDTH};

// VGA palette index -> closest terminal color.
const PALETTE: [Color; 16] = [
    Color::Black,
    Color::DarkBlue,
    Color::DarkGreen,
    Color::DarkCyan,
    Color::DarkRed,
    Color::DarkMagenta,
    Color::DarkYellow,
    Color::Grey,
    Color::DarkGrey,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::White,
];

/// Terminal screen backed by two cell buffers: the frame the game is drawing
/// and the one currently on the terminal.
pub struct TermSurface {
    stdout: Stdout,
    frame: CellBuffer,
    shown: CellBuffer,
    // Forces a full repaint on the first present.
    fresh: bool,
}

impl TermSurface {
    pub fn new() -> Self {
        TermSurface { stdout: stdout(), frame: CellBuffer::new(), shown: CellBuffer::new(), fresh: true }
    }

    pub fn check_size() -> crossterm::Result<Option<(TermInt, TermInt)>> {
        let (width, height) = terminal::size()?;
        if width < BOARD_WIDTH || height < BOARD_HEIGHT {
            Ok(Some((width, height)))
        } else {
            Ok(None)
        }
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Sends every cell that changed since the last call, then flushes.
    pub fn present(&mut self) -> crossterm::Result<()> {
        if self.fresh {
            self.fresh = false;
            for y in 0..BOARD_HEIGHT {
                for x in 0..BOARD_WIDTH {
                    if let Some(cell) = self.frame.cell(x, y) {
                        self.print_at(x, y, cell)?;
                    }
                }
            }
        } else {
            let changes: Vec<_> = self.frame.changes_since(&self.shown).collect();
            if changes.is_empty() {
                return Ok(());
            }
            for ((x, y), cell) in changes {
                self.print_at(x, y, cell)?;
            }
        }

        self.shown = self.frame.clone();
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, x: TermInt, y: TermInt, cell: Cell) -> crossterm::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetBackgroundColor(PALETTE[cell.attr.bg() as usize]),
            SetForegroundColor(PALETTE[cell.attr.fg() as usize]),
            Print(cell.ch)
        )
    }
}

impl Surface for TermSurface {
    fn clear(&mut self, color: Attr) {
        self.frame.clear(color);
    }

    fn put_cell(&mut self, x: TermInt, y: TermInt, ch: char, color: Attr) {
        self.frame.put_cell(x, y, ch, color);
    }
}

/// Keyboard that hands out set-1 scancodes, one event per poll.
pub struct TermKeys {
    quit: bool,
    error: Option<ErrorKind>,
}

impl TermKeys {
    pub fn new() -> Self {
        TermKeys { quit: false, error: None }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn take_error(&mut self) -> Option<ErrorKind> {
        self.error.take()
    }

    fn read_key(&mut self) -> crossterm::Result<Option<KeyEvent>> {
        if !poll(Duration::from_millis(0))? {
            return Ok(None);
        }
        match read()? {
            Event::Key(ev) => Ok(Some(ev)),
            _ => Ok(None),
        }
    }
}

impl KeySource for TermKeys {
    fn poll_key(&mut self) -> u8 {
        match self.read_key() {
            Ok(Some(ev)) if is_ctrl_c(&ev) => {
                self.quit = true;
                NO_KEY
            }
            Ok(Some(ev)) => scancode(&ev),
            Ok(None) => NO_KEY,
            Err(err) => {
                self.error = Some(err);
                NO_KEY
            }
        }
    }
}

fn scancode(ev: &KeyEvent) -> u8 {
    match ev.code {
        KeyCode::Up => SCANCODE_W,
        KeyCode::Down => SCANCODE_S,
        KeyCode::Left => SCANCODE_A,
        KeyCode::Right => SCANCODE_D,
        KeyCode::Enter => SCANCODE_ENTER,
        KeyCode::Backspace => SCANCODE_BACKSPACE,
        KeyCode::Tab => SCANCODE_TAB,
        KeyCode::Char(ch) => scancode_for_char(ch).unwrap_or(SCANCODE_ESC),
        _ => SCANCODE_ESC,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
