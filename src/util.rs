/// Sorted-sequence merging.
///
/// This module provides the classic two-pointer merge of two ascending
/// integer sequences into one ascending sequence. It is independent of the
/// expression tree and shares no types with it.
pub mod merge;
