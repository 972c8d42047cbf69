//! This module provides the input parsing for the console boundary: operand
//! lines typed by the user and binary-to-integer conversion for the report.

use crate::types::MachineError;

/// Parses a line of user input into the two binary operands.
///
/// The line may carry extra spaces anywhere, but every character must be
/// `0`, `1` or a space and exactly two operands must remain after
/// splitting.
///
/// # Arguments
///
/// * `line` - The raw operand line as typed.
///
/// # Returns
///
/// * `Ok((a, b))` with the two operand strings.
/// * `Err(MachineError::InvalidBinary)` carrying the trimmed line otherwise.
pub fn parse_operands(line: &str) -> Result<(String, String), MachineError> {
    let invalid = || MachineError::InvalidBinary(line.trim().to_string());

    if line.chars().any(|c| !matches!(c, '0' | '1' | ' ')) {
        return Err(invalid());
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((a.to_string(), b.to_string())),
        _ => Err(invalid()),
    }
}

/// Converts a binary string into its integer value.
///
/// Fails on an empty string, on characters other than the two digits, and
/// on values that do not fit in 64 bits.
pub fn binary_value(text: &str) -> Result<u64, MachineError> {
    if text.chars().any(|c| !matches!(c, '0' | '1')) {
        return Err(MachineError::InvalidBinary(text.to_string()));
    }

    u64::from_str_radix(text, 2).map_err(|_| MachineError::InvalidBinary(text.to_string()))
}
