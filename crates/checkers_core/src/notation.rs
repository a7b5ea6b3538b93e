//! Text form of squares: `row,col` with 0-based indices.

use std::fmt;
use std::str::FromStr;

use crate::types::Square;

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = String;

    /// Accepts `5,0`, `5 0` or `(5,0)`. Bounds are not checked here so that
    /// callers can report `OutOfBounds` through the normal rejection path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(format!("expected `row,col`, got `{s}`"));
        }
        let row = parts[0]
            .parse::<i8>()
            .map_err(|e| format!("bad row `{}`: {e}", parts[0]))?;
        let col = parts[1]
            .parse::<i8>()
            .map_err(|e| format!("bad column `{}`: {e}", parts[1]))?;
        Ok(Square::new(row, col))
    }
}

/// Formats a list of squares as `a; b; c` for status lines.
pub fn squares_to_string(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
