//! Integer compositions.
//!
//! A composition of `n` is an ordered sequence of positive parts summing
//! to `n`. Compositions are streamed in order of decreasing leading part,
//! so the first composition is `[n]` and the last is all ones. If part
//! sizes are read as multiplicities of items in a multiset, this order
//! yields the multisets in ascending lexicographic order.

use smallvec::SmallVec;

/// Parts of a composition or partition. Parts are small in practice, so
/// they are kept inline.
pub type Parts = SmallVec<[u32; 8]>;

/// Streams every integer composition of `n`.
///
/// There are `2^(n-1)` compositions of `n >= 1`, and exactly one (empty)
/// composition of zero.
#[must_use]
pub fn compositions(n: u32) -> Compositions {
    Compositions {
        stack: vec![(Parts::new(), n)],
    }
}

/// Iterator over the integer compositions of a fixed target.
///
/// Works through an explicit stack of (prefix, remainder) frames; a frame
/// with remainder zero is a finished composition.
pub struct Compositions {
    stack: Vec<(Parts, u32)>,
}

impl Iterator for Compositions {
    type Item = Parts;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((prefix, remaining)) = self.stack.pop() {
            if remaining == 0 {
                return Some(prefix);
            }
            // Push smaller leading parts first so the largest is popped
            // (and therefore yielded) first.
            for part in 1..=remaining {
                let mut next = prefix.clone();
                next.push(part);
                self.stack.push((next, remaining - part));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(n: u32) -> Vec<Vec<u32>> {
        compositions(n).map(|c| c.to_vec()).collect()
    }

    #[test]
    fn test_zero_has_one_empty_composition() {
        assert_eq!(collect(0), vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_compositions_of_three() {
        assert_eq!(
            collect(3),
            vec![vec![3], vec![2, 1], vec![1, 2], vec![1, 1, 1]]
        );
    }

    #[test]
    fn test_compositions_of_four_order() {
        let all = collect(4);
        assert_eq!(all.first(), Some(&vec![4]));
        assert_eq!(all.last(), Some(&vec![1, 1, 1, 1]));
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_count_doubles() {
        for n in 1..=10u32 {
            assert_eq!(compositions(n).count(), 1 << (n - 1));
        }
    }

    #[test]
    fn test_every_composition_sums_to_target() {
        for c in compositions(7) {
            assert_eq!(c.iter().sum::<u32>(), 7);
            assert!(c.iter().all(|&part| part >= 1));
        }
    }
}
