/// The direction in which a path is walked.
///
/// Walking [Direction::Forward] steps from subjects to objects, walking [Direction::Backward]
/// steps from objects to subjects. Inverse paths flip the direction for their sub-path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }

    /// Returns the two operands of a sequence in the order in which they must be evaluated. When
    /// walking backward, the right operand is evaluated first.
    pub fn order<T>(self, lhs: T, rhs: T) -> (T, T) {
        match self {
            Direction::Forward => (lhs, rhs),
            Direction::Backward => (rhs, lhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(Direction::Forward.flip(), Direction::Backward);
        assert_eq!(Direction::Forward.flip().flip(), Direction::Forward);
    }

    #[test]
    fn backward_swaps_sequence_operands() {
        assert_eq!(Direction::Forward.order("l", "r"), ("l", "r"));
        assert_eq!(Direction::Backward.order("l", "r"), ("r", "l"));
    }
}
