mod common;

use crate::common::{corpus, init_logging, is_non_decreasing, multiset};
use recseq::{cata, direct, fold, primitives, sort};

fn is_even(x: &i64) -> bool {
    x % 2 == 0
}

#[test]
fn reverse_is_an_involution() {
    init_logging();
    for s in corpus() {
        assert_eq!(fold::reverse(&fold::reverse(&s)), s);
        assert_eq!(primitives::reverse(&primitives::reverse(&s)), s);
        assert_eq!(cata::reverse(&cata::reverse(&s)), s);
    }
}

#[test]
fn map_preserves_length() {
    for s in corpus() {
        let doubled = fold::map(&s, |x| x * 2);
        assert_eq!(fold::length(&doubled), fold::length(&s));
        assert_eq!(fold::length(&fold::map(&s, ToString::to_string)), s.len());
    }
}

#[test]
fn filter_and_reject_partition_the_input() {
    for s in corpus() {
        let kept = fold::filter(&s, is_even);
        let rejected = fold::reject(&s, is_even);
        assert_eq!(kept.len() + rejected.len(), s.len());
        assert!(kept.iter().all(is_even));
        assert!(!rejected.iter().any(is_even));

        let rejoined: Vec<i64> = kept.iter().chain(&rejected).copied().collect();
        assert_eq!(multiset(&rejoined), multiset(&s));
        assert_eq!(fold::partition(&s, is_even), (kept, rejected));
    }
}

#[test]
fn every_formulation_agrees() {
    init_logging();
    for s in corpus() {
        let n = s.len();
        assert_eq!(primitives::length(&s), n);
        assert_eq!(primitives::length_acc(&s), n);
        assert_eq!(fold::length(&s), n);
        assert_eq!(cata::length(&s), n);

        let reversed = primitives::reverse_acc(&s);
        assert_eq!(primitives::reverse(&s), reversed);
        assert_eq!(fold::reverse(&s), reversed);
        assert_eq!(cata::reverse(&s), reversed);

        let squared = fold::map(&s, |x| x * x);
        assert_eq!(direct::map(&s, |x| x * x), squared);
        assert_eq!(cata::map(&s, |x| x * x), squared);

        let evens = fold::filter(&s, is_even);
        assert_eq!(direct::filter(&s, is_even), evens);
        assert_eq!(cata::filter(&s, is_even), evens);
        assert_eq!(direct::reject(&s, is_even), fold::reject(&s, is_even));
        assert_eq!(direct::partition(&s, is_even), fold::partition(&s, is_even));

        assert_eq!(direct::copy(&s), primitives::copy(&s));
    }
}

#[test]
fn sorts_produce_ordered_permutations() {
    init_logging();
    for s in corpus() {
        let quick = sort::quicksort(&s);
        assert!(is_non_decreasing(&quick), "not sorted: {quick:?}");
        assert_eq!(multiset(&quick), multiset(&s));
        assert_eq!(sort::merge_sort(&s), quick);
    }
}

#[test]
fn merging_sorted_halves_sorts_the_whole() {
    for s in corpus() {
        let (front, back) = s.split_at(s.len() / 3);
        let merged = sort::merge(&sort::quicksort(front), &sort::quicksort(back));
        assert_eq!(merged, sort::quicksort(&s));
    }
}
