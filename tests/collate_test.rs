#![cfg(feature = "alloc")]

use iter_collate::{chunked, collate, collate_rev, first, first_or, Error};

mod helpers;
use helpers::test_all_collations;

#[test]
fn test_all_collate_configurations() {
    [
        // empty inputs
        vec![],
        // single empty source
        vec![vec![]],
        // multiple empty sources
        vec![vec![], vec![], vec![]],
        // single element with empty sources
        vec![vec![], vec![], vec![1]],
        // multiple single elements
        vec![vec![], vec![1], vec![2], vec![3], vec![]],
        // single element
        vec![vec![1]],
        // basic collation
        vec![vec![1, 3, 5], vec![2, 4, 6]],
        // unsorted single source
        vec![vec![1, 0, -1]],
        // unsorted multiple sources
        vec![vec![1, 0, -1], vec![1, 0, 1], vec![0, 1, 0]],
        // duplicate values
        vec![vec![0, 0, -1], vec![0, 0, 1], vec![0, 0, 0]],
        // mixed lengths
        vec![vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10], vec![0], vec![11], vec![2, 3]],
        // negative numbers
        vec![vec![-5, -3, -1], vec![-4, -2, 0]],
        // tie breaking tests
        vec![vec![0], vec![0], vec![-1, 0]],
        vec![vec![1, 1, 2], vec![1, 3]],
        vec![vec![2, 1, 2], vec![1], vec![1, 2, 1], vec![2], vec![1, 2]],
        // identical sources
        vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]],
    ]
    .iter()
    .for_each(test_all_collations);
}

#[test]
fn collate_string_sources() {
    let merged: Vec<char> = collate(["ACDZ".chars(), "AZ".chars(), "JKL".chars()]).collect();
    assert_eq!(merged, vec!['A', 'A', 'C', 'D', 'J', 'K', 'L', 'Z', 'Z']);
}

#[test]
fn collate_rev_descending_sources() {
    let merged: Vec<_> = collate_rev([vec![9, 5, 2], vec![8, 3], vec![7, 1, 0]]).collect();
    assert_eq!(merged, vec![9, 8, 7, 5, 3, 2, 1, 0]);
    assert!(merged.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn collate_is_lazy() {
    // only the heads are read up front, one per source
    let mut merged = collate([0..i64::MAX, 5..i64::MAX]);
    assert_eq!(merged.next(), Some(0));
    assert_eq!(merged.next(), Some(1));
}

#[test]
fn first_of_collation() {
    assert_eq!(first(collate([vec![2, 9], vec![3]])), Ok(2));
    assert_eq!(
        first(collate(Vec::<Vec<i32>>::new())),
        Err(Error::EmptyIterable)
    );
    assert_eq!(first_or(collate(Vec::<Vec<i32>>::new()), -1), -1);
}

#[test]
fn chunked_collation() {
    // batching a collated stream preserves the merged order
    let groups: Vec<_> = chunked(collate([vec![1, 3, 5, 7], vec![2, 4, 6]]), 3).collect();
    assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
}
