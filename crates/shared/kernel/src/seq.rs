//! Positional access over lazy sequences.

use std::borrow::Cow;

#[kiln_derive::kiln_error]
pub enum SequenceError {
    #[error("Sequence exhausted{}: requested element #{requested}, only {produced} produced", format_context(.context))]
    ExhaustedSequence { requested: usize, produced: usize, context: Option<Cow<'static, str>> },
}

/// Discards the next `n` elements of `cursor` and returns the one after them.
///
/// The cursor is left positioned after the returned element, so repeated calls
/// keep advancing the same sequence.
///
/// # Errors
/// Returns [`SequenceError::ExhaustedSequence`] if fewer than `n + 1` elements remain.
///
/// ```rust
/// use kiln_kernel::seq::advance_and_take;
///
/// let mut letters = ['a', 'b', 'c'].into_iter();
/// assert_eq!(advance_and_take(&mut letters, 2).unwrap(), 'c');
/// assert!(advance_and_take(&mut letters, 0).is_err());
/// ```
pub fn advance_and_take<I>(cursor: &mut I, n: usize) -> Result<I::Item, SequenceError>
where
    I: Iterator + ?Sized,
{
    let mut produced = 0;
    while produced < n {
        if cursor.next().is_none() {
            return Err(exhausted(n, produced));
        }
        produced += 1;
    }
    cursor.next().ok_or_else(|| exhausted(n, produced))
}

const fn exhausted(n: usize, produced: usize) -> SequenceError {
    SequenceError::ExhaustedSequence { requested: n + 1, produced, context: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_after_skipping() {
        let mut it = [10, 20, 30].into_iter();
        assert_eq!(advance_and_take(&mut it, 2).unwrap(), 30);
    }

    #[test]
    fn test_exhausted_reports_progress() {
        let mut it = [10, 20, 30].into_iter();
        let err = advance_and_take(&mut it, 3).unwrap_err();
        assert!(matches!(err, SequenceError::ExhaustedSequence { requested: 4, produced: 3, .. }));
    }

    #[test]
    fn test_infinite_sequence() {
        let mut squares = (0u64..).map(|i| i * i);
        assert_eq!(advance_and_take(&mut squares, 4).unwrap(), 16);
        assert_eq!(advance_and_take(&mut squares, 0).unwrap(), 25);
    }

    #[test]
    fn test_dyn_cursor() {
        let mut boxed: Box<dyn Iterator<Item = char>> = Box::new("abc".chars());
        assert_eq!(advance_and_take(boxed.as_mut(), 1).unwrap(), 'b');
    }
}
