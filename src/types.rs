//! This module defines the core data structures and types used throughout the
//! arithmetic Turing machine: the tape alphabet, head movements, transition
//! tables, machine programs, execution results, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of blank cells appended after the input when a tape is built.
pub const TAPE_PADDING: usize = 200;
/// The maximum number of steps to execute before halting.
pub const MAX_EXECUTION_STEPS: usize = 10_000;
/// Number of cells shown on each side of the head when rendering a tape window.
pub const TAPE_WINDOW: usize = 20;

/// A symbol on the tape. The alphabet is closed: nothing else ever appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The empty cell, also used as the separator between the two operands.
    Blank,
    /// The binary digit `0`.
    Zero,
    /// The binary digit `1`.
    One,
}

impl Symbol {
    /// Converts a character into a `Symbol`.
    ///
    /// Returns `None` for characters outside the tape alphabet.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            ' ' => Some(Symbol::Blank),
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            _ => None,
        }
    }

    /// Returns the character this symbol occupies on the tape.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Blank => ' ',
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }

    /// Whether this symbol is a binary digit (`Zero` or `One`).
    pub fn is_digit(self) -> bool {
        matches!(self, Symbol::Zero | Symbol::One)
    }
}

/// A head movement attached to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Move the head one position to the left.
    Left,
    /// Keep the head in the same position.
    Stay,
    /// Move the head one position to the right.
    Right,
}

impl Move {
    /// The position delta this movement applies to the head.
    pub fn offset(self) -> isize {
        match self {
            Move::Left => -1,
            Move::Stay => 0,
            Move::Right => 1,
        }
    }
}

/// One transition-table cell: what to do after reading a digit in a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The state the machine adopts after this transition.
    pub next_state: usize,
    /// The symbol written over the cell under the head.
    pub write: Symbol,
    /// How the head moves afterwards.
    pub movement: Move,
}

/// A fixed transition table.
///
/// Rows are indexed by state; column 0 answers `Zero`, column 1 answers
/// `One`. `Blank` is never a valid lookup key: the engine checks for it and
/// stops before consulting the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    rows: Vec<[Action; 2]>,
}

impl TransitionTable {
    /// Creates a table from its rows.
    pub fn new(rows: Vec<[Action; 2]>) -> Self {
        Self { rows }
    }

    /// Looks up the action for `(state, symbol)`.
    ///
    /// Returns `MachineError::UndefinedTransition` for `Blank` or for a
    /// state without a row. Neither occurs on the normal engine path.
    pub fn lookup(&self, state: usize, symbol: Symbol) -> Result<Action, MachineError> {
        let column = match symbol {
            Symbol::Zero => 0,
            Symbol::One => 1,
            Symbol::Blank => return Err(MachineError::UndefinedTransition(state, symbol)),
        };

        self.rows
            .get(state)
            .map(|row| row[column])
            .ok_or(MachineError::UndefinedTransition(state, symbol))
    }

    /// Number of states the table defines rows for.
    pub fn state_count(&self) -> usize {
        self.rows.len()
    }

    /// The raw rows, for validation passes.
    pub fn rows(&self) -> &[[Action; 2]] {
        &self.rows
    }
}

/// A complete machine program: a transition table plus its halting boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineProgram {
    /// The name of the program.
    pub name: String,
    /// The operator this program encodes.
    pub operator: Operator,
    /// The transition table driving the run.
    pub table: TransitionTable,
    /// The halting boundary. The run loop continues while
    /// `state < halt_state - 1`, so the highest-numbered row of each table
    /// is a filler the loop never enters.
    pub halt_state: usize,
}

/// An arithmetic operator selecting one of the built-in programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Binary addition (`+`).
    Add,
    /// Binary subtraction (`-`).
    Sub,
    /// Binary multiplication (`*`).
    Mul,
    /// Binary floor division (`/`).
    Div,
}

impl Operator {
    /// Computes the result in ordinary integer arithmetic.
    ///
    /// This is the reference the final report compares the tape against. It
    /// also hosts the guards evaluated before a run starts: a subtraction
    /// that would go negative, a division by zero, and a sum or product
    /// that does not fit in 64 bits all fail here, and the machine never
    /// starts.
    pub fn apply(self, a: u64, b: u64) -> Result<u64, MachineError> {
        match self {
            Operator::Add => a.checked_add(b).ok_or(MachineError::Overflow(a, self, b)),
            Operator::Sub => a.checked_sub(b).ok_or(MachineError::NegativeResult(a, b)),
            Operator::Mul => a.checked_mul(b).ok_or(MachineError::Overflow(a, self, b)),
            Operator::Div => a.checked_div(b).ok_or(MachineError::DivisionByZero),
        }
    }

    /// The operator's symbol as typed by the user.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(MachineError::UnknownOperator(other.to_string())),
        }
    }
}

/// Represents the outcome of a machine execution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The machine successfully performed a step and continues execution.
    Continue,
    /// The machine has halted.
    Halt(Halt),
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// The state index crossed the halting boundary.
    FinalState,
    /// A blank appeared under the head. The scan states are built around
    /// this exit; it is a designed termination, not an error.
    Blank,
    /// The step limit was hit before the machine settled. Non-fatal: the
    /// partial tape is still interpreted.
    StepLimit,
    /// The run aborted with an error.
    Err(MachineError),
}

/// Represents various errors that can occur during machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// Indicates a tape access outside the fixed cell range.
    #[error("tape position {position} is out of range (tape length {len})")]
    OutOfRange { position: isize, len: usize },
    /// Indicates that the transition table has no entry for a state/symbol pair.
    #[error("no transition defined for state {0} reading {1:?}")]
    UndefinedTransition(usize, Symbol),
    /// Indicates a character outside the tape alphabet.
    #[error("symbol {0:?} is not part of the tape alphabet")]
    InvalidSymbol(char),
    /// Indicates a binary literal that failed validation or exceeds 64 bits.
    #[error("invalid binary number: {0:?}")]
    InvalidBinary(String),
    /// Indicates an operator other than `+`, `-`, `*`, `/`.
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),
    /// Indicates a subtraction whose result would be negative.
    #[error("subtraction result would be negative: {0} < {1}")]
    NegativeResult(u64, u64),
    /// Indicates a division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Indicates a sum or product that does not fit in 64 bits.
    #[error("result does not fit in 64 bits: {0} {1} {2}")]
    Overflow(u64, Operator, u64),
    /// Indicates an error during the validation of a program's structure.
    #[error("program validation error: {0}")]
    ValidationError(String),
}
