//! Shared helpers for integration tests

#![allow(dead_code)]

/// Hamming distance between two equal-length byte slices
pub fn hamming(a: &[u8], b: &[u8]) -> usize {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Naive k-mismatch search: (start, mismatches) for every qualifying window
pub fn naive_search(pattern: &[u8], k: usize, text: &[u8]) -> Vec<(usize, usize)> {
    text.windows(pattern.len())
        .enumerate()
        .map(|(start, window)| (start, hamming(pattern, window)))
        .filter(|&(_, d)| d <= k)
        .collect()
}
