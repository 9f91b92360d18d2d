//! Batch chunking for bulk submission.

use crate::common::*;

/// Splits a finished record sequence into fixed-size upload batches.
/// The last batch may be shorter.
pub fn chunks<T>(records: Vec<T>, size: usize) -> Result<Vec<Vec<T>>> {
    ensure!(size > 0, "chunk size must be positive");

    let chunks = records.into_iter().chunks(size);
    let batches: Vec<Vec<_>> = chunks.into_iter().map(|chunk| chunk.collect()).collect();
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_test() {
        let batches = chunks((0..7).collect(), 3).unwrap();
        assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);

        let batches = chunks(Vec::<i32>::new(), 3).unwrap();
        assert!(batches.is_empty());

        assert!(chunks(vec![1, 2, 3], 0).is_err());
    }
}
