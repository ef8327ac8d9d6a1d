//! Rotation direction.

use core::fmt;

/// Direction of motor motion.
///
/// Operators name directions `right` (clockwise) and `left`
/// (counter-clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise, operator token `right`.
    Clockwise,
    /// Counter-clockwise, operator token `left`.
    CounterClockwise,
}

impl Direction {
    /// Match an operator token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("right") {
            Some(Direction::Clockwise)
        } else if token.eq_ignore_ascii_case("left") {
            Some(Direction::CounterClockwise)
        } else {
            None
        }
    }

    /// Canonical operator token.
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Direction::Clockwise => "right",
            Direction::CounterClockwise => "left",
        }
    }

    /// DIR line level encoding this direction.
    ///
    /// Clockwise drives DIR HIGH unless `invert` is set.
    #[inline]
    pub fn dir_level(self, invert: bool) -> bool {
        match self {
            Direction::Clockwise => !invert,
            Direction::CounterClockwise => invert,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
