//! This module provides functions for analyzing machine programs to detect
//! structural errors before execution. This includes checks for empty tables,
//! a consistent halting boundary, and transitions that stay within the table.

use crate::types::{MachineError, MachineProgram};

/// Represents various errors that can be found during the analysis of a program.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// Indicates a program whose transition table has no rows.
    EmptyTable,
    /// Indicates a halting boundary that leaves a live state without a row,
    /// or one the machine would start beyond.
    InvalidHaltState { halt_state: usize, state_count: usize },
    /// Indicates transitions whose next state has no row in the table.
    UndefinedNextStates(Vec<String>),
}

impl From<AnalysisError> for MachineError {
    /// Converts an `AnalysisError` into a `MachineError::ValidationError`.
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::EmptyTable => {
                MachineError::ValidationError("No transitions defined".to_string())
            }
            AnalysisError::InvalidHaltState {
                halt_state,
                state_count,
            } => MachineError::ValidationError(format!(
                "Halting boundary {} is invalid for a table of {} states",
                halt_state, state_count
            )),
            AnalysisError::UndefinedNextStates(transitions) => MachineError::ValidationError(
                format!("Transitions reference undefined states: {:?}", transitions),
            ),
        }
    }
}

/// Analyzes a `MachineProgram` for structural errors.
///
/// The built-in programs lean on the blank early exit rather than reaching
/// every row through digit transitions, so there is deliberately no
/// reachability check here.
///
/// # Arguments
///
/// * `program` - A reference to the program to be analyzed.
///
/// # Returns
///
/// * `Ok(())` if no errors are found.
/// * `Err(MachineError::ValidationError)` for the first violated check.
pub fn analyze(program: &MachineProgram) -> Result<(), MachineError> {
    let errors = [check_structure, check_halt_boundary, check_next_states]
        .iter()
        .filter_map(|f| f(program).err())
        .collect::<Vec<_>>();

    if let Some(first_error) = errors.first() {
        return Err(first_error.clone().into());
    }

    Ok(())
}

/// Checks that the transition table has at least one row.
fn check_structure(program: &MachineProgram) -> Result<(), AnalysisError> {
    if program.table.rows().is_empty() {
        return Err(AnalysisError::EmptyTable);
    }

    Ok(())
}

/// Checks that the halting boundary is consistent with the table.
///
/// The step loop runs while `state < halt_state - 1`, so every state below
/// `halt_state - 1` needs a row. A boundary of 0 would make the machine
/// start halted; a boundary past `state_count + 1` would let the loop enter
/// a state with no row.
fn check_halt_boundary(program: &MachineProgram) -> Result<(), AnalysisError> {
    let state_count = program.table.state_count();

    if program.halt_state == 0 || program.halt_state > state_count + 1 {
        return Err(AnalysisError::InvalidHaltState {
            halt_state: program.halt_state,
            state_count,
        });
    }

    Ok(())
}

/// Checks that every action's `next_state` has a row in the table.
///
/// # Returns
///
/// * `Ok(())` if all next states are defined.
/// * `Err(AnalysisError::UndefinedNextStates)` listing each offending cell.
fn check_next_states(program: &MachineProgram) -> Result<(), AnalysisError> {
    let state_count = program.table.state_count();

    let mut undefined_transitions = Vec::new();
    for (state, row) in program.table.rows().iter().enumerate() {
        for (column, action) in row.iter().enumerate() {
            if action.next_state >= state_count {
                undefined_transitions.push(format!(
                    "{}[{}] -> {}",
                    state, column, action.next_state
                ));
            }
        }
    }

    if !undefined_transitions.is_empty() {
        return Err(AnalysisError::UndefinedNextStates(undefined_transitions));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Move, Operator, Symbol, TransitionTable};

    fn create_test_program(rows: Vec<[Action; 2]>, halt_state: usize) -> MachineProgram {
        MachineProgram {
            name: "Test Program".to_string(),
            operator: Operator::Add,
            table: TransitionTable::new(rows),
            halt_state,
        }
    }

    fn row_to(next_state: usize) -> [Action; 2] {
        let action = |write| Action {
            next_state,
            write,
            movement: Move::Stay,
        };

        [action(Symbol::Zero), action(Symbol::One)]
    }

    #[test]
    fn test_valid_program() {
        let program = create_test_program(vec![row_to(1), row_to(0)], 2);

        assert!(analyze(&program).is_ok());
    }

    #[test]
    fn test_boundary_one_past_the_table_is_valid() {
        // A single-row loop with boundary 2: state 0 is live, state 1 is
        // the halting side of the boundary and needs no row.
        let program = create_test_program(vec![row_to(0)], 2);

        assert!(analyze(&program).is_ok());
    }

    #[test]
    fn test_empty_table() {
        let program = create_test_program(Vec::new(), 1);

        let result = analyze(&program);
        assert_eq!(
            result,
            Err(MachineError::ValidationError(
                "No transitions defined".to_string()
            ))
        );
    }

    #[test]
    fn test_zero_halt_boundary() {
        let program = create_test_program(vec![row_to(0)], 0);

        let result = check_halt_boundary(&program);
        assert_eq!(
            result,
            Err(AnalysisError::InvalidHaltState {
                halt_state: 0,
                state_count: 1,
            })
        );
    }

    #[test]
    fn test_halt_boundary_past_the_table() {
        let program = create_test_program(vec![row_to(0)], 3);

        let result = check_halt_boundary(&program);
        assert_eq!(
            result,
            Err(AnalysisError::InvalidHaltState {
                halt_state: 3,
                state_count: 1,
            })
        );
    }

    #[test]
    fn test_undefined_next_states() {
        let program = create_test_program(vec![row_to(5)], 2);

        let result = check_next_states(&program);
        match result {
            Err(AnalysisError::UndefinedNextStates(transitions)) => {
                assert_eq!(transitions.len(), 2); // both columns point at 5
                assert!(transitions[0].contains("-> 5"));
            }
            other => panic!("Expected UndefinedNextStates error, got {:?}", other),
        }
    }

    #[test]
    fn test_analysis_error_conversion() {
        let error = AnalysisError::InvalidHaltState {
            halt_state: 9,
            state_count: 4,
        };
        let machine_error: MachineError = error.into();

        match machine_error {
            MachineError::ValidationError(msg) => {
                assert!(msg.contains("Halting boundary 9"));
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_analyze_reports_the_first_error() {
        // Empty table and boundary 0 at once: the structure check wins.
        let program = create_test_program(Vec::new(), 0);

        let result = analyze(&program);
        assert_eq!(
            result,
            Err(MachineError::ValidationError(
                "No transitions defined".to_string()
            ))
        );
    }
}
