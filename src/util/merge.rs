/// Merges two ascending integer slices into one ascending vector.
///
/// The result contains exactly the multiset union of both inputs, so its
/// length is `first.len() + second.len()`. Equal elements from `first` are
/// taken before their counterparts in `second`, which keeps the merge
/// stable. Inputs that are not ascending produce an output in the same
/// arbitrary order the two-pointer walk visits them; no sortedness check is
/// performed.
///
/// # Parameters
/// - `first`: The first ascending sequence.
/// - `second`: The second ascending sequence.
///
/// # Returns
/// A new `Vec<i64>` holding every element of both inputs in ascending order.
///
/// # Example
/// ```
/// use exprsimp::util::merge::merge_sorted;
///
/// let merged = merge_sorted(&[1, 3, 5, 7, 9], &[2, 4, 6, 8, 10]);
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
#[must_use]
pub fn merge_sorted(first: &[i64], second: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        if first[i] <= second[j] {
            merged.push(first[i]);
            i += 1;
        } else {
            merged.push(second[j]);
            j += 1;
        }
    }

    // At most one of these has anything left.
    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);

    merged
}
