//! Reads the binary result back off a final tape.

use crate::tape::Tape;
use crate::types::Symbol;

/// Extracts the result as a single binary string.
///
/// The tape is scanned left to right. Accumulation begins at the first `1`
/// and from there every digit is kept; blanks are skipped, not treated as
/// terminators. Digit runs separated by blanks therefore concatenate into
/// one string, second-operand remnants included.
///
/// # Returns
///
/// * `Some(String)` with the accumulated digits.
/// * `None` when the tape holds no `1` at all.
pub fn extract_result(tape: &Tape) -> Option<String> {
    let mut result = String::new();
    let mut started = false;

    for &symbol in tape.symbols() {
        match symbol {
            Symbol::One => {
                started = true;
                result.push('1');
            }
            Symbol::Zero if started => result.push('0'),
            _ => {}
        }
    }

    started.then_some(result)
}

/// Lists every maximal run of digits on the tape, in order.
///
/// Unlike `extract_result` this keeps the runs apart and keeps runs of
/// zeros, which makes it the better view of a tape that still carries both
/// operands.
pub fn binary_regions(tape: &Tape) -> Vec<String> {
    let mut regions = Vec::new();
    let mut current = String::new();

    for &symbol in tape.symbols() {
        if symbol.is_digit() {
            current.push(symbol.as_char());
        } else if !current.is_empty() {
            regions.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        regions.push(current);
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tape(input: &str) -> Tape {
        Tape::from_input(input).unwrap()
    }

    #[test]
    fn test_extracts_from_the_first_one() {
        assert_eq!(extract_result(&tape("101")), Some("101".to_string()));
        assert_eq!(extract_result(&tape("0101")), Some("101".to_string()));
        assert_eq!(extract_result(&tape("001")), Some("1".to_string()));
    }

    #[test]
    fn test_blanks_do_not_terminate_the_scan() {
        // Both operands end up concatenated when the tape still holds them.
        assert_eq!(extract_result(&tape("101 11")), Some("10111".to_string()));
        assert_eq!(extract_result(&tape("1 0 1")), Some("101".to_string()));
        assert_eq!(
            extract_result(&tape("110 10")),
            Some("11010".to_string())
        );
    }

    #[test]
    fn test_zeros_after_the_first_one_are_kept() {
        assert_eq!(
            extract_result(&tape("0100 001")),
            Some("100001".to_string())
        );
    }

    #[test]
    fn test_extraction_does_not_disturb_the_tape() {
        let t = tape("101 11");

        assert_eq!(extract_result(&t), extract_result(&t));
        assert_eq!(t.to_string(), "101 11");
    }

    #[test]
    fn test_no_result_without_a_one() {
        assert_eq!(extract_result(&tape("000")), None);
        assert_eq!(extract_result(&tape("0 00")), None);
        assert_eq!(extract_result(&tape("")), None);
        assert_eq!(extract_result(&tape("   ")), None);
    }

    #[test]
    fn test_regions_keep_operands_apart() {
        assert_eq!(binary_regions(&tape("101 11")), vec!["101", "11"]);
        assert_eq!(binary_regions(&tape("110 10")), vec!["110", "10"]);
    }

    #[test]
    fn test_regions_keep_runs_of_zeros() {
        assert_eq!(binary_regions(&tape("000 0")), vec!["000", "0"]);
    }

    #[test]
    fn test_regions_of_an_empty_tape() {
        assert_eq!(binary_regions(&tape("")), Vec::<String>::new());
        assert_eq!(binary_regions(&tape("  ")), Vec::<String>::new());
    }
}
