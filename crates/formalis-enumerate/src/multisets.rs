//! Multiset permutation counts.

use formalis_numbers::Integer;

/// Counts the distinct permutations of a multiset of parts.
///
/// This is the multinomial `len! / (r_1! * r_2! * ...)` where the `r_i`
/// are the multiplicities of the distinct values. It corrects a partition
/// for the number of compositions that collapse onto it.
#[must_use]
pub fn multiset_permutations(parts: &[u32]) -> Integer {
    let mut sorted = parts.to_vec();
    sorted.sort_unstable();

    #[allow(clippy::cast_possible_truncation)]
    let mut count = Integer::factorial(sorted.len() as u32);
    for run in run_lengths(&sorted) {
        count = count.div_floor(&Integer::factorial(run));
    }
    count
}

/// Lengths of maximal runs of equal adjacent values.
fn run_lengths(values: &[u32]) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut iter = values.iter();
    let Some(mut prev) = iter.next() else {
        return runs;
    };
    let mut length = 1;
    for value in iter {
        if value == prev {
            length += 1;
        } else {
            runs.push(length);
            prev = value;
            length = 1;
        }
    }
    runs.push(length);
    runs
}
