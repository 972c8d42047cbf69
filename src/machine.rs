//! This module defines the `Machine` struct, which executes an arithmetic
//! program over a tape. It handles the machine's state, tape operations,
//! head movements, and the halting rules of the step loop.

use crate::tape::{Head, Tape};
use crate::types::{Halt, MachineError, MachineProgram, Step, Symbol, MAX_EXECUTION_STEPS};

/// A single-tape, single-head machine bound to one program and one input.
///
/// This struct encapsulates the full configuration of a run: the current
/// state index, the tape contents, the head position, and the step count.
/// Each invocation builds a fresh machine; nothing is shared across runs.
pub struct Machine {
    program: MachineProgram,
    tape: Tape,
    initial_tape: Tape,
    head: Head,
    state: usize,
    step_count: usize,
}

impl Machine {
    /// Creates a new `Machine` for `program` with `input` written at the
    /// left end of the tape and the head on the first cell.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` when the input contains only `0`, `1` and spaces.
    /// * `Err(MachineError::InvalidSymbol)` otherwise.
    pub fn new(program: MachineProgram, input: &str) -> Result<Self, MachineError> {
        let tape = Tape::from_input(input)?;

        Ok(Self {
            program,
            initial_tape: tape.clone(),
            tape,
            head: Head::new(),
            state: 0,
            step_count: 0,
        })
    }

    /// Executes a single step of the machine.
    ///
    /// The checks run in a fixed order: step limit, halting boundary, tape
    /// read, blank under the head, then the transition itself. A blank stops
    /// the run without consulting the table.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if the machine performed a transition.
    /// * `Step::Halt(_)` once any stop condition holds; further calls keep
    ///   returning the same kind of halt.
    pub fn step(&mut self) -> Step {
        if self.step_count >= MAX_EXECUTION_STEPS {
            return Step::Halt(Halt::StepLimit);
        }

        if self.is_halted() {
            return Step::Halt(Halt::FinalState);
        }

        let symbol = match self.tape.read(self.head.position()) {
            Ok(symbol) => symbol,
            Err(e) => return Step::Halt(Halt::Err(e)),
        };

        // The scan states rely on this exit; only digits reach the table.
        if symbol == Symbol::Blank {
            return Step::Halt(Halt::Blank);
        }

        let action = match self.program.table.lookup(self.state, symbol) {
            Ok(action) => action,
            Err(e) => return Step::Halt(Halt::Err(e)),
        };

        if let Err(e) = self.tape.write(self.head.position(), action.write) {
            return Step::Halt(Halt::Err(e));
        }

        self.head.move_by(action.movement.offset());
        self.state = action.next_state;
        self.step_count += 1;

        Step::Continue
    }

    /// Runs the machine until it halts.
    ///
    /// Termination is guaranteed: every `Continue` counts toward
    /// [`MAX_EXECUTION_STEPS`] and `step` halts once the limit is reached.
    pub fn run(&mut self) -> Halt {
        loop {
            match self.step() {
                Step::Continue => continue,
                Step::Halt(halt) => return halt,
            }
        }
    }

    /// Resets the machine to its initial configuration.
    /// This includes resetting the state, tape, head position, and step count.
    pub fn reset(&mut self) {
        self.tape = self.initial_tape.clone();
        self.head = Head::new();
        self.state = 0;
        self.step_count = 0;
    }

    /// Returns the current state index.
    pub fn state(&self) -> usize {
        self.state
    }

    /// Returns the current head position.
    pub fn head(&self) -> isize {
        self.head.position()
    }

    /// Returns the tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the total number of steps executed so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the program this machine runs.
    pub fn program(&self) -> &MachineProgram {
        &self.program
    }

    /// Checks whether the state index has crossed the halting boundary.
    ///
    /// The loop continues while `state < halt_state - 1`, so the
    /// highest-numbered row of each table is never entered. The boundary is
    /// part of the programs' encoding and must stay exactly here.
    pub fn is_halted(&self) -> bool {
        self.state + 1 >= self.program.halt_state
    }
}
