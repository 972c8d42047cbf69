use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use turith::machine::Machine;
use turith::types::{Halt, Operator, Step};
use turith::{binary_regions, binary_value, extract_result, parse_operands, program_for};

/// A Turing machine that adds, subtracts, multiplies and divides binary numbers.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  turith-cli --numbers \"101 11\" --operator +
  turith-cli -n \"110 10\" -o / --debug
  printf '101 11\\n+\\n' | turith-cli")]
struct Cli {
    /// The two binary operands, separated by a space
    #[clap(short, long)]
    numbers: Option<String>,

    /// The operation to perform: +, -, * or /
    #[clap(short, long)]
    operator: Option<String>,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,

    /// Emit the final report as a JSON object
    #[clap(short, long)]
    json: bool,
}

/// One fully validated request: two binary operands and an operator.
struct Request {
    a: String,
    b: String,
    operator: Operator,
}

/// The machine-readable form of the final report.
#[derive(Serialize)]
struct Report {
    program: String,
    input: String,
    operator: String,
    halt: String,
    steps: usize,
    final_tape: String,
    result_binary: Option<String>,
    result_decimal: Option<u64>,
    regions: Vec<String>,
    expected_decimal: u64,
    expected_binary: String,
}

fn main() {
    let cli = Cli::parse();

    let request = match collect_request(&cli) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The reference arithmetic runs first; a subtraction that would go
    // negative or a division by zero never starts the machine.
    let expected = binary_value(&request.a)
        .and_then(|a| binary_value(&request.b).map(|b| (a, b)))
        .and_then(|(a, b)| request.operator.apply(a, b));
    let expected = match expected {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let program = program_for(request.operator);
    let input = format!("{} {}", request.a, request.b);

    let mut machine = match Machine::new(program.clone(), &input) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !cli.json {
        println!("Program: {}", program.name);
        println!("Initial tape: {}", machine.tape().window(machine.head()));
        println!("State: {}, Head: {}", machine.state(), machine.head());
    }

    // Under --json the trace moves to stderr; stdout stays one JSON document.
    let halt = if cli.debug {
        if cli.json {
            run_with_trace(&mut machine, &mut io::stderr())
        } else {
            run_with_trace(&mut machine, &mut io::stdout())
        }
    } else {
        machine.run()
    };

    if cli.json {
        print_json_report(&machine, &halt, &input, expected);
    } else {
        print_report(&machine, &halt, expected, cli.debug);
    }
}

/// Collects the operands and operator from flags, prompts, or piped stdin.
fn collect_request(cli: &Cli) -> Result<Request, String> {
    if atty::is(atty::Stream::Stdin) {
        collect_interactive(cli)
    } else {
        collect_piped(cli)
    }
}

/// Collects missing pieces of the request by prompting on the terminal.
/// Invalid answers are reported and asked again.
fn collect_interactive(cli: &Cli) -> Result<Request, String> {
    let (a, b) = match &cli.numbers {
        Some(line) => parse_operands(line).map_err(|e| e.to_string())?,
        None => loop {
            let line = prompt("Enter two binary numbers separated by a space: ")?;
            match parse_operands(&line) {
                Ok(pair) => break pair,
                Err(e) => println!("Invalid input: {}", e),
            }
        },
    };

    let operator: Operator = match &cli.operator {
        Some(text) => text.parse().map_err(|e| format!("{}", e))?,
        None => loop {
            let line = prompt("Enter the operation (+, -, *, /): ")?;
            match line.parse() {
                Ok(operator) => break operator,
                Err(e) => println!("Invalid input: {}", e),
            }
        },
    };

    Ok(Request { a, b, operator })
}

/// Collects missing pieces of the request from piped stdin: one line of
/// numbers, then one line of operator. There is no terminal to re-prompt,
/// so invalid input is fatal.
fn collect_piped(cli: &Cli) -> Result<Request, String> {
    let mut lines = io::stdin().lines();

    let (a, b) = match &cli.numbers {
        Some(line) => parse_operands(line).map_err(|e| e.to_string())?,
        None => parse_operands(&next_line(&mut lines)?).map_err(|e| e.to_string())?,
    };

    let operator: Operator = match &cli.operator {
        Some(text) => text.parse().map_err(|e| format!("{}", e))?,
        None => next_line(&mut lines)?
            .parse()
            .map_err(|e| format!("{}", e))?,
    };

    Ok(Request { a, b, operator })
}

/// Prints `message` and reads one line of input, without its newline.
fn prompt(message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to write to stdout: {}", e))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read from stdin: {}", e))?;
    if bytes == 0 {
        return Err("unexpected end of input".to_string());
    }

    Ok(line.trim_end().to_string())
}

/// Reads the next line from piped stdin.
fn next_line(lines: &mut io::Lines<io::StdinLock<'static>>) -> Result<String, String> {
    lines
        .next()
        .ok_or_else(|| "unexpected end of input".to_string())?
        .map_err(|e| format!("Failed to read from stdin: {}", e))
}

/// Steps the machine to completion, writing one line per configuration to
/// `out`.
fn run_with_trace(machine: &mut Machine, out: &mut impl io::Write) -> Halt {
    let mut print_state = |machine: &Machine| {
        let _ = writeln!(
            out,
            "Step: {}, State: {}, Head: {}, Tape: {}",
            machine.step_count(),
            machine.state(),
            machine.head(),
            machine.tape().window(machine.head())
        );
    };

    print_state(machine);

    loop {
        match machine.step() {
            Step::Continue => print_state(machine),
            Step::Halt(halt) => return halt,
        }
    }
}

/// Prints the human-readable closing report.
fn print_report(machine: &Machine, halt: &Halt, expected: u64, debug: bool) {
    match halt {
        Halt::StepLimit => println!("Warning: maximum step count reached."),
        Halt::Err(e) => println!("Machine stopped early: {}", e),
        Halt::FinalState | Halt::Blank => {}
    }

    if debug {
        println!(
            "\nMachine halted after {} steps ({}).",
            machine.step_count(),
            describe_halt(halt)
        );
    }

    println!("Final tape: {}", machine.tape().window(machine.head()));

    match extract_result(machine.tape()) {
        Some(result) => match binary_value(&result) {
            Ok(decimal) => println!("Result on the tape: {} (decimal {})", result, decimal),
            Err(_) => println!("Result on the tape: {} (decimal value exceeds 64 bits)", result),
        },
        None => println!("No result found on the tape."),
    }

    let regions = binary_regions(machine.tape());
    if !regions.is_empty() {
        println!("Binary regions on the tape: {}", regions.join(", "));
    }

    println!("Expected result: {:b} (decimal {})", expected, expected);
}

/// Prints the closing report as one JSON object.
fn print_json_report(machine: &Machine, halt: &Halt, input: &str, expected: u64) {
    let result_binary = extract_result(machine.tape());
    let result_decimal = result_binary.as_deref().and_then(|r| binary_value(r).ok());

    let report = Report {
        program: machine.program().name.clone(),
        input: input.to_string(),
        operator: machine.program().operator.to_string(),
        halt: describe_halt(halt),
        steps: machine.step_count(),
        final_tape: machine.tape().to_string(),
        result_binary,
        result_decimal,
        regions: binary_regions(machine.tape()),
        expected_decimal: expected,
        expected_binary: format!("{:b}", expected),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to encode the report: {}", e);
            std::process::exit(1);
        }
    }
}

/// A short phrase naming the halt reason.
fn describe_halt(halt: &Halt) -> String {
    match halt {
        Halt::FinalState => "final state reached".to_string(),
        Halt::Blank => "blank under the head".to_string(),
        Halt::StepLimit => "step limit reached".to_string(),
        Halt::Err(e) => format!("error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_writes_to_the_given_stream() {
        let mut machine =
            Machine::new(program_for(Operator::Add).clone(), "101 11").unwrap();
        let mut trace = Vec::new();

        assert_eq!(run_with_trace(&mut machine, &mut trace), Halt::Blank);

        let text = String::from_utf8(trace).unwrap();
        assert_eq!(text.lines().count(), 4); // the start configuration plus three steps
        assert!(text.starts_with("Step: 0, State: 0, Head: 0, Tape: [1]01_11"));

        let last = text.lines().last().unwrap();
        assert!(last.starts_with("Step: 3, State: 0, Head: 3, Tape: 101[_]11"));
    }
}
