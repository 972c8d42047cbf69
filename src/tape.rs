//! This module defines the `Tape` and `Head` types. The tape is a fixed-size
//! vector of symbols built from the input text plus a run of trailing blanks;
//! the head is a signed cursor moved by the transition actions.

use crate::types::{MachineError, Symbol, TAPE_PADDING, TAPE_WINDOW};
use std::fmt;

/// A fixed-length tape of symbols.
///
/// The tape never grows: it is sized once at construction as the input plus
/// `TAPE_PADDING` blank cells. Every access is bounds-checked and a position
/// outside the cell range fails with `MachineError::OutOfRange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Symbol>,
}

impl Tape {
    /// Builds a tape from the input text followed by `TAPE_PADDING` blanks.
    ///
    /// # Returns
    ///
    /// * `Ok(Tape)` when every character is `0`, `1` or a space.
    /// * `Err(MachineError::InvalidSymbol)` on the first other character.
    pub fn from_input(input: &str) -> Result<Self, MachineError> {
        let mut cells = Vec::with_capacity(input.len() + TAPE_PADDING);

        for c in input.chars() {
            let symbol = Symbol::from_char(c).ok_or(MachineError::InvalidSymbol(c))?;
            cells.push(symbol);
        }

        cells.extend(std::iter::repeat(Symbol::Blank).take(TAPE_PADDING));

        Ok(Self { cells })
    }

    /// Reads the symbol at `position`.
    pub fn read(&self, position: isize) -> Result<Symbol, MachineError> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Writes `symbol` at `position`.
    pub fn write(&mut self, position: isize, symbol: Symbol) -> Result<(), MachineError> {
        let i = self.index(position)?;
        self.cells[i] = symbol;
        Ok(())
    }

    /// Returns the number of cells on the tape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether the tape has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the tape contents as a slice of symbols.
    pub fn symbols(&self) -> &[Symbol] {
        &self.cells
    }

    /// Renders the cells around `head` as a single line.
    ///
    /// The window spans `TAPE_WINDOW` cells on each side of the head, clamped
    /// to the tape bounds. Blanks are shown as underscores and the cell under
    /// the head is bracketed.
    pub fn window(&self, head: isize) -> String {
        let len = self.cells.len() as isize;
        let start = (head - TAPE_WINDOW as isize).clamp(0, len);
        let end = (head + TAPE_WINDOW as isize + 1).clamp(0, len);

        let mut rendered = String::new();
        for i in start..end {
            let c = match self.cells[i as usize] {
                Symbol::Blank => '_',
                symbol => symbol.as_char(),
            };

            if i == head {
                rendered.push('[');
                rendered.push(c);
                rendered.push(']');
            } else {
                rendered.push(c);
            }
        }

        rendered
    }

    /// Converts a signed position into a cell index, failing when it falls
    /// outside the tape.
    fn index(&self, position: isize) -> Result<usize, MachineError> {
        if position < 0 || position as usize >= self.cells.len() {
            return Err(MachineError::OutOfRange {
                position,
                len: self.cells.len(),
            });
        }

        Ok(position as usize)
    }
}

impl fmt::Display for Tape {
    /// Writes the tape contents with trailing blanks trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.cells.iter().map(|s| s.as_char()).collect();
        write!(f, "{}", text.trim_end())
    }
}

/// The read/write head: a signed cursor over the tape.
///
/// Movements are applied without clamping, so the position can leave the
/// tape. It is the tape access that fails in that case, not the move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Head {
    position: isize,
}

impl Head {
    /// Creates a head at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current position.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Moves the head by `delta` positions.
    pub fn move_by(&mut self, delta: isize) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tape_construction() {
        let tape = Tape::from_input("101 11").unwrap();

        assert_eq!(tape.len(), 6 + TAPE_PADDING);
        assert_eq!(tape.read(0).unwrap(), Symbol::One);
        assert_eq!(tape.read(3).unwrap(), Symbol::Blank);
        assert_eq!(tape.read(5).unwrap(), Symbol::One);
        assert_eq!(tape.read(6).unwrap(), Symbol::Blank); // first padding cell
    }

    #[test]
    fn test_tape_rejects_foreign_characters() {
        assert_eq!(
            Tape::from_input("10x1"),
            Err(MachineError::InvalidSymbol('x'))
        );
        assert_eq!(
            Tape::from_input("102"),
            Err(MachineError::InvalidSymbol('2'))
        );
    }

    #[test]
    fn test_tape_write() {
        let mut tape = Tape::from_input("00").unwrap();

        tape.write(1, Symbol::One).unwrap();
        assert_eq!(tape.read(1).unwrap(), Symbol::One);
    }

    #[test]
    fn test_tape_access_out_of_range() {
        let mut tape = Tape::from_input("1").unwrap();
        let len = tape.len();

        assert_eq!(
            tape.read(-1),
            Err(MachineError::OutOfRange { position: -1, len })
        );
        assert_eq!(
            tape.read(len as isize),
            Err(MachineError::OutOfRange {
                position: len as isize,
                len,
            })
        );
        assert_eq!(
            tape.write(-5, Symbol::Zero),
            Err(MachineError::OutOfRange { position: -5, len })
        );
    }

    #[test]
    fn test_tape_display_trims_padding() {
        let tape = Tape::from_input("101 11").unwrap();
        assert_eq!(tape.to_string(), "101 11");
    }

    #[test]
    fn test_window_brackets_the_head() {
        let tape = Tape::from_input("101 11").unwrap();

        let rendered = tape.window(0);
        assert!(rendered.starts_with("[1]01_11"));

        let rendered = tape.window(3);
        assert!(rendered.starts_with("101[_]11"));
    }

    #[test]
    fn test_window_clamps_to_tape_bounds() {
        let tape = Tape::from_input("11").unwrap();

        // Head left of the tape: no bracket, window starts at cell 0.
        let rendered = tape.window(-1);
        assert!(rendered.starts_with("11_"));
        assert!(!rendered.contains('['));

        // Head deep in the padding: underscores only.
        let rendered = tape.window(tape.len() as isize - 1);
        assert_eq!(rendered, "____________________[_]");
    }

    #[test]
    fn test_window_width() {
        let tape = Tape::from_input("1111111111111111111111111111").unwrap();

        // Interior head: TAPE_WINDOW cells either side, the head cell, and
        // its two brackets.
        let rendered = tape.window(25);
        assert_eq!(rendered.len(), 2 * TAPE_WINDOW + 3);
    }

    #[test]
    fn test_window_spans_evenly_around_an_interior_head() {
        let tape = Tape::from_input(&"1".repeat(60)).unwrap();

        let rendered = tape.window(25);
        let side = "1".repeat(TAPE_WINDOW);
        assert_eq!(rendered, format!("{}[1]{}", side, side));
    }

    #[test]
    fn test_head_movement() {
        let mut head = Head::new();
        assert_eq!(head.position(), 0);

        head.move_by(1);
        head.move_by(1);
        assert_eq!(head.position(), 2);

        head.move_by(-1);
        assert_eq!(head.position(), 1);

        head.move_by(0);
        assert_eq!(head.position(), 1);
    }

    #[test]
    fn test_head_is_not_clamped() {
        let mut head = Head::new();

        head.move_by(-1);
        assert_eq!(head.position(), -1);

        head.move_by(-10);
        assert_eq!(head.position(), -11);
    }
}
