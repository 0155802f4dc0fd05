//! Quadrant identifiers and board geometry.
//!
//! The four quadrants are laid out as a 2x2 grid:
//!
//! ```text
//! +----+----+
//! | Q1 | Q2 |
//! +----+----+
//! | Q3 | Q4 |
//! +----+----+
//! ```
//!
//! Two orders matter and they are not the same:
//!
//! - **Lexical order** (`Q1, Q2, Q3, Q4`): used for persistence and
//!   iteration.
//! - **Clockwise order** (`Q1, Q2, Q4, Q3`): used for cycling focus and
//!   for the digit shortcuts, which follow the on-screen layout rather
//!   than the names. Digit `3` lands on `Q4` (bottom-right) and digit
//!   `4` on `Q3` (bottom-left). This mapping is intentional; do not
//!   "fix" it to be sequential.

use std::fmt;

/// Identifies one of the four fixed quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadrantId {
    /// Top-left: urgent and important.
    Q1,
    /// Top-right: not urgent but important.
    Q2,
    /// Bottom-left: urgent but not important.
    Q3,
    /// Bottom-right: neither urgent nor important.
    Q4,
}

/// A direction on the 2x2 board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl QuadrantId {
    /// All quadrants in lexical order. This is the persistence order.
    pub const ALL: [QuadrantId; 4] = [
        QuadrantId::Q1,
        QuadrantId::Q2,
        QuadrantId::Q3,
        QuadrantId::Q4,
    ];

    /// All quadrants in visual clockwise order, starting top-left.
    pub const CLOCKWISE: [QuadrantId; 4] = [
        QuadrantId::Q1,
        QuadrantId::Q2,
        QuadrantId::Q4,
        QuadrantId::Q3,
    ];

    /// Returns the stable key used in the persisted snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use notequill::board::QuadrantId;
    ///
    /// assert_eq!(QuadrantId::Q1.key(), "q1");
    /// assert_eq!(QuadrantId::Q4.key(), "q4");
    /// ```
    pub fn key(&self) -> &'static str {
        match self {
            QuadrantId::Q1 => "q1",
            QuadrantId::Q2 => "q2",
            QuadrantId::Q3 => "q3",
            QuadrantId::Q4 => "q4",
        }
    }

    /// Returns the Eisenhower matrix label for this quadrant.
    pub fn title(&self) -> &'static str {
        match self {
            QuadrantId::Q1 => "Urgent · Important",
            QuadrantId::Q2 => "Not Urgent · Important",
            QuadrantId::Q3 => "Urgent · Not Important",
            QuadrantId::Q4 => "Not Urgent · Not Important",
        }
    }

    /// Returns the array index backing this quadrant in a [`crate::board::Board`].
    pub fn index(&self) -> usize {
        match self {
            QuadrantId::Q1 => 0,
            QuadrantId::Q2 => 1,
            QuadrantId::Q3 => 2,
            QuadrantId::Q4 => 3,
        }
    }

    /// Maps a digit shortcut to its quadrant.
    ///
    /// Digits follow the visual clockwise order, not the quadrant names:
    /// `1` and `2` select the top row left-to-right, `3` selects the
    /// bottom-right quadrant (`Q4`), and `4` the bottom-left (`Q3`).
    ///
    /// # Examples
    ///
    /// ```
    /// use notequill::board::QuadrantId;
    ///
    /// assert_eq!(QuadrantId::from_digit('1'), Some(QuadrantId::Q1));
    /// assert_eq!(QuadrantId::from_digit('3'), Some(QuadrantId::Q4));
    /// assert_eq!(QuadrantId::from_digit('4'), Some(QuadrantId::Q3));
    /// assert_eq!(QuadrantId::from_digit('5'), None);
    /// ```
    pub fn from_digit(digit: char) -> Option<QuadrantId> {
        match digit {
            '1' => Some(QuadrantId::Q1),
            '2' => Some(QuadrantId::Q2),
            '3' => Some(QuadrantId::Q4),
            '4' => Some(QuadrantId::Q3),
            _ => None,
        }
    }

    /// Returns the next quadrant in visual clockwise order.
    ///
    /// # Examples
    ///
    /// ```
    /// use notequill::board::QuadrantId;
    ///
    /// assert_eq!(QuadrantId::Q2.next_clockwise(), QuadrantId::Q4);
    /// assert_eq!(QuadrantId::Q3.next_clockwise(), QuadrantId::Q1);
    /// ```
    pub fn next_clockwise(&self) -> QuadrantId {
        match self {
            QuadrantId::Q1 => QuadrantId::Q2,
            QuadrantId::Q2 => QuadrantId::Q4,
            QuadrantId::Q4 => QuadrantId::Q3,
            QuadrantId::Q3 => QuadrantId::Q1,
        }
    }

    /// Returns the grid neighbor in the given direction.
    ///
    /// The board does not wrap: moving left from a left-column quadrant
    /// returns the quadrant itself.
    pub fn neighbor(&self, direction: Direction) -> QuadrantId {
        match (self, direction) {
            (QuadrantId::Q2, Direction::Left) => QuadrantId::Q1,
            (QuadrantId::Q4, Direction::Left) => QuadrantId::Q3,
            (QuadrantId::Q1, Direction::Right) => QuadrantId::Q2,
            (QuadrantId::Q3, Direction::Right) => QuadrantId::Q4,
            (QuadrantId::Q3, Direction::Up) => QuadrantId::Q1,
            (QuadrantId::Q4, Direction::Up) => QuadrantId::Q2,
            (QuadrantId::Q1, Direction::Down) => QuadrantId::Q3,
            (QuadrantId::Q2, Direction::Down) => QuadrantId::Q4,
            (q, _) => *q,
        }
    }
}

impl fmt::Display for QuadrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_order_matches_layout() {
        assert_eq!(
            QuadrantId::CLOCKWISE,
            [
                QuadrantId::Q1,
                QuadrantId::Q2,
                QuadrantId::Q4,
                QuadrantId::Q3
            ]
        );
    }

    #[test]
    fn test_digit_mapping_is_visual_not_lexical() {
        assert_eq!(QuadrantId::from_digit('3'), Some(QuadrantId::Q4));
        assert_eq!(QuadrantId::from_digit('4'), Some(QuadrantId::Q3));
    }

    #[test]
    fn test_cycle_returns_to_start_after_four_steps() {
        for start in QuadrantId::ALL {
            let mut current = start;
            let mut visited = Vec::new();
            for _ in 0..4 {
                current = current.next_clockwise();
                visited.push(current);
            }
            assert_eq!(current, start);
            for q in QuadrantId::ALL {
                assert_eq!(visited.iter().filter(|v| **v == q).count(), 1);
            }
        }
    }

    #[test]
    fn test_neighbor_does_not_wrap() {
        assert_eq!(QuadrantId::Q1.neighbor(Direction::Left), QuadrantId::Q1);
        assert_eq!(QuadrantId::Q2.neighbor(Direction::Up), QuadrantId::Q2);
        assert_eq!(QuadrantId::Q4.neighbor(Direction::Down), QuadrantId::Q4);
    }

    #[test]
    fn test_neighbor_moves_on_grid() {
        assert_eq!(QuadrantId::Q1.neighbor(Direction::Right), QuadrantId::Q2);
        assert_eq!(QuadrantId::Q1.neighbor(Direction::Down), QuadrantId::Q3);
        assert_eq!(QuadrantId::Q4.neighbor(Direction::Up), QuadrantId::Q2);
        assert_eq!(QuadrantId::Q4.neighbor(Direction::Left), QuadrantId::Q3);
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(format!("{}", QuadrantId::Q3), "q3");
    }
}
