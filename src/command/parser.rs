//! Operator command grammar.
//!
//! ```text
//! line      = direction WS steps
//! direction = "right" | "left"        ; ASCII case-insensitive
//! steps     = ["+" | "-"] DIGIT+      ; base 10, must be > 0
//! ```
//!
//! Leading, trailing and repeated whitespace is ignored. Parsing is pure.

use crate::error::ParseError;
use crate::motion::{Direction, MoveCommand};

/// Lines that end the session, compared ignoring ASCII case.
pub const QUIT_SENTINELS: [&str; 3] = ["quit", "exit", "q"];

/// Whether `line` asks to end the session.
pub fn is_quit_sentinel(line: &str) -> bool {
    let line = line.trim();
    QUIT_SENTINELS
        .iter()
        .any(|sentinel| line.eq_ignore_ascii_case(sentinel))
}

/// Parse a raw command line into a [`MoveCommand`].
///
/// Checks run in order: token count, numeric step count, positive step
/// count, direction. A bad step count is reported even when the direction
/// is also wrong.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first check that fails.
pub fn parse(line: &str) -> Result<MoveCommand, ParseError> {
    let mut tokens = line.split_whitespace();
    let (direction, steps) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(direction), Some(steps), None) => (direction, steps),
        _ => {
            return Err(ParseError::WrongTokenCount(
                line.split_whitespace().count(),
            ))
        }
    };

    let steps = parse_steps(steps)?;
    let direction = Direction::from_token(direction).ok_or(ParseError::UnknownDirection)?;

    MoveCommand::new(direction, steps).ok_or(ParseError::NonPositiveSteps)
}

fn parse_steps(token: &str) -> Result<u32, ParseError> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumericSteps);
    }

    // Every negative integer, however long, is <= 0
    if negative {
        return Err(ParseError::NonPositiveSteps);
    }

    match digits.parse::<u32>() {
        Ok(0) => Err(ParseError::NonPositiveSteps),
        Ok(steps) => Ok(steps),
        Err(_) => Err(ParseError::StepsOutOfRange { max: u32::MAX }),
    }
}
