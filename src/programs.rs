use crate::types::{Action, MachineProgram, Operator, TransitionTable};
use crate::types::Move::{self, Left, Right, Stay};
use crate::types::Symbol::{self, Blank, One, Zero};

fn act(next_state: usize, write: Symbol, movement: Move) -> Action {
    Action {
        next_state,
        write,
        movement,
    }
}

/// Binary addition.
///
/// Six states: a rightward scan, three digit-flipping states walking left,
/// and two blank writers behind the halting boundary.
fn addition() -> MachineProgram {
    MachineProgram {
        name: "Binary addition".to_string(),
        operator: Operator::Add,
        table: TransitionTable::new(vec![
            [act(0, Zero, Right), act(0, One, Right)],
            [act(1, Zero, Left), act(2, One, Left)],
            [act(2, One, Left), act(1, Zero, Left)],
            [act(1, One, Left), act(2, Zero, Left)],
            [act(3, Blank, Right), act(3, Blank, Right)],
            [act(4, Blank, Stay), act(4, Blank, Stay)],
        ]),
        halt_state: 6,
    }
}

/// Binary subtraction.
///
/// The addition table minus its third flipping state.
fn subtraction() -> MachineProgram {
    MachineProgram {
        name: "Binary subtraction".to_string(),
        operator: Operator::Sub,
        table: TransitionTable::new(vec![
            [act(0, Zero, Right), act(0, One, Right)],
            [act(1, Zero, Left), act(2, One, Left)],
            [act(2, One, Left), act(1, Zero, Left)],
            [act(3, Blank, Right), act(3, Blank, Right)],
            [act(4, Blank, Stay), act(4, Blank, Stay)],
        ]),
        halt_state: 5,
    }
}

/// Binary multiplication.
///
/// The only table whose scan state consumes a leading digit instead of
/// rewriting it in place.
fn multiplication() -> MachineProgram {
    MachineProgram {
        name: "Binary multiplication".to_string(),
        operator: Operator::Mul,
        table: TransitionTable::new(vec![
            [act(0, Zero, Right), act(1, Zero, Right)],
            [act(1, Zero, Right), act(2, One, Left)],
            [act(2, One, Left), act(1, Zero, Left)],
            [act(3, Zero, Left), act(2, One, Left)],
            [act(4, Blank, Right), act(4, Blank, Right)],
            [act(5, Blank, Stay), act(5, Blank, Stay)],
        ]),
        halt_state: 6,
    }
}

/// Binary division.
///
/// Extends the subtraction shape with a second rightward scan and a
/// digit-inverting pass.
fn division() -> MachineProgram {
    MachineProgram {
        name: "Binary division".to_string(),
        operator: Operator::Div,
        table: TransitionTable::new(vec![
            [act(0, Zero, Right), act(0, One, Right)],
            [act(1, Zero, Left), act(2, One, Left)],
            [act(2, One, Left), act(1, Zero, Left)],
            [act(3, Zero, Right), act(3, One, Right)],
            [act(4, One, Left), act(4, Zero, Left)],
            [act(5, Blank, Right), act(5, Blank, Right)],
            [act(6, Blank, Stay), act(6, Blank, Stay)],
        ]),
        halt_state: 7,
    }
}

lazy_static::lazy_static! {
    /// The built-in programs, one per operator.
    pub static ref PROGRAMS: Vec<MachineProgram> = vec![
        addition(),
        subtraction(),
        multiplication(),
        division(),
    ];
}

/// Returns the built-in program for `operator`.
pub fn program_for(operator: Operator) -> &'static MachineProgram {
    let index = match operator {
        Operator::Add => 0,
        Operator::Sub => 1,
        Operator::Mul => 2,
        Operator::Div => 3,
    };

    &PROGRAMS[index]
}

/// List all program names.
pub fn program_names() -> Vec<&'static str> {
    PROGRAMS.iter().map(|p| p.name.as_str()).collect()
}
