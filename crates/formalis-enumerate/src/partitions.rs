//! Integer partitions.
//!
//! A partition of `n` is a multiset of positive parts summing to `n`,
//! kept here as a non-increasing sequence. Partitions are streamed in
//! reverse lexicographic order: `[n]` first, all ones last. Each call to
//! `next` computes the successor in place, so generation is fully lazy.

use smallvec::smallvec;

use crate::compositions::Parts;

/// Streams every integer partition of `n` with non-increasing parts.
#[must_use]
pub fn partitions(n: u32) -> Partitions {
    Partitions {
        current: Some(if n == 0 {
            Parts::new()
        } else {
            smallvec![n]
        }),
        started: false,
    }
}

/// Iterator over the integer partitions of a fixed target.
pub struct Partitions {
    current: Option<Parts>,
    started: bool,
}

impl Iterator for Partitions {
    type Item = Parts;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = self.current.take()?;
        if !self.started {
            self.started = true;
            let out = current.clone();
            self.current = Some(current);
            return Some(out);
        }

        // Successor in reverse lexicographic order: strip trailing ones,
        // decrement the last remaining part, then redistribute the freed
        // amount greedily in chunks no larger than that part.
        let mut freed = 0;
        while current.last() == Some(&1) {
            current.pop();
            freed += 1;
        }
        // All parts were ones: that was the final partition.
        let Some(last) = current.last_mut() else {
            return None;
        };
        *last -= 1;
        freed += 1;
        let cap = *last;
        while freed > cap {
            current.push(cap);
            freed -= cap;
        }
        current.push(freed);
        let out = current.clone();
        self.current = Some(current);
        Some(out)
    }
}
