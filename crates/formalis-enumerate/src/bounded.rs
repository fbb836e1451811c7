//! Accessors over deliberately-bounded sequences.
//!
//! True series never run out, but the enumerators in this crate produce
//! finite sequences, and callers slicing them need a loud failure rather
//! than a silent truncation when they ask past the end.

use crate::error::EnumerateError;

/// Returns the element at index `n`.
///
/// # Errors
///
/// Fails with [`EnumerateError::InsufficientElements`] if the sequence
/// ends at or before index `n`.
pub fn nth<I>(n: usize, items: I) -> Result<I::Item, EnumerateError>
where
    I: IntoIterator,
{
    let mut produced = 0;
    for item in items {
        if produced == n {
            return Ok(item);
        }
        produced += 1;
    }
    Err(EnumerateError::InsufficientElements {
        wanted: n + 1,
        got: produced,
    })
}

/// Returns the first `n` elements, in order.
///
/// # Errors
///
/// Fails with [`EnumerateError::InsufficientElements`] if the sequence
/// produces fewer than `n` elements.
pub fn take<I>(n: usize, items: I) -> Result<Vec<I::Item>, EnumerateError>
where
    I: IntoIterator,
{
    let mut out = Vec::with_capacity(n);
    for item in items {
        if out.len() == n {
            break;
        }
        out.push(item);
    }
    if out.len() < n {
        return Err(EnumerateError::InsufficientElements {
            wanted: n,
            got: out.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth() {
        assert_eq!(nth(2, [10, 20, 30, 40]).unwrap(), 30);
        assert_eq!(
            nth(4, [10, 20, 30]),
            Err(EnumerateError::InsufficientElements { wanted: 5, got: 3 })
        );
    }

    #[test]
    fn test_take() {
        assert_eq!(take(2, [1, 2, 3]).unwrap(), vec![1, 2]);
        assert_eq!(take(3, [1, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            take(4, [1, 2, 3]),
            Err(EnumerateError::InsufficientElements { wanted: 4, got: 3 })
        );
    }

    #[test]
    fn test_take_zero() {
        assert_eq!(take(0, std::iter::empty::<i32>()).unwrap(), Vec::<i32>::new());
    }
}
