//! This crate provides the core logic for a Turing machine that performs
//! binary arithmetic. It includes modules for the tape and head, the step
//! loop, the four built-in transition-table programs, pre-run program
//! analysis, result extraction, and parsing of console input.

pub mod analyzer;
pub mod extractor;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod tape;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the extraction functions from the extractor module.
pub use extractor::{binary_regions, extract_result};
/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports the input parsing functions from the parser module.
pub use parser::{binary_value, parse_operands};
/// Re-exports the program registry and lookups from the programs module.
pub use programs::{program_for, program_names, PROGRAMS};
/// Re-exports the `Tape` and `Head` types from the tape module.
pub use tape::{Head, Tape};
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Action, Halt, MachineError, MachineProgram, Move, Operator, Step, Symbol, TransitionTable,
    MAX_EXECUTION_STEPS, TAPE_PADDING, TAPE_WINDOW,
};
