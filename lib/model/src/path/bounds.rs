use crate::InvalidPathError;

/// The bounds of a repetition `path{min,max}`.
///
/// An unset `min` behaves like `0`, an unset `max` means that the repetition is unbounded. The
/// bounds are validated on construction, hence `max >= min` holds whenever both are set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RepetitionBounds {
    min: Option<u64>,
    max: Option<u64>,
}

impl RepetitionBounds {
    /// Creates new [RepetitionBounds], rejecting a `max` that is smaller than `min`.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Result<Self, InvalidPathError> {
        if let (Some(min), Some(max)) = (min, max) {
            if max < min {
                return Err(InvalidPathError::InvalidRepetitionBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    /// The lower bound, treating an unset bound as `0`.
    pub fn effective_min(&self) -> u64 {
        self.min.unwrap_or(0)
    }

    /// `path{0,}`
    pub fn is_zero_or_more(&self) -> bool {
        self.effective_min() == 0 && self.max.is_none()
    }

    /// `path{1,}`
    pub fn is_one_or_more(&self) -> bool {
        self.min == Some(1) && self.max.is_none()
    }

    /// Returns `n` if the bounds describe exactly `n` repetitions.
    pub fn fixed_length(&self) -> Option<u64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => Some(min),
            _ => None,
        }
    }

    /// Whether the zero-length path is part of the repetition.
    pub fn includes_zero(&self) -> bool {
        self.effective_min() == 0
    }

    /// The bounds that remain after taking a single step. A bound of `0` stays `0` (it is
    /// already satisfied) and unset bounds stay unset.
    #[must_use]
    pub fn decrement(&self) -> Self {
        Self {
            min: self.min.map(|min| min.saturating_sub(1)),
            max: self.max.map(|max| max.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_closures() {
        let zero_or_more = RepetitionBounds::new(Some(0), None).unwrap();
        assert!(zero_or_more.is_zero_or_more());
        assert!(!zero_or_more.is_one_or_more());

        let one_or_more = RepetitionBounds::new(Some(1), None).unwrap();
        assert!(one_or_more.is_one_or_more());
        assert!(!one_or_more.includes_zero());

        let unset = RepetitionBounds::new(None, None).unwrap();
        assert!(unset.is_zero_or_more());
    }

    #[test]
    fn classifies_fixed_length() {
        assert_eq!(
            RepetitionBounds::new(Some(3), Some(3)).unwrap().fixed_length(),
            Some(3)
        );
        assert_eq!(
            RepetitionBounds::new(Some(2), Some(3)).unwrap().fixed_length(),
            None
        );
        assert_eq!(RepetitionBounds::new(None, Some(0)).unwrap().fixed_length(), None);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let bounds = RepetitionBounds::new(Some(0), Some(2)).unwrap().decrement();
        assert_eq!(bounds.min(), Some(0));
        assert_eq!(bounds.max(), Some(1));

        let bounds = RepetitionBounds::new(Some(3), None).unwrap().decrement();
        assert_eq!(bounds.min(), Some(2));
        assert_eq!(bounds.max(), None);

        let bounds = RepetitionBounds::new(None, Some(4)).unwrap().decrement();
        assert_eq!(bounds.min(), None);
        assert_eq!(bounds.max(), Some(3));
    }
}
