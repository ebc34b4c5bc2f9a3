//! Property tests for the assignment engine.
//!
//! Inputs are generated from a fixed-seed xorshift generator over small
//! alphabets so that duplicates, size mismatches and ties are all common.

use std::sync::Arc;
use std::thread;

use label_matcher::{
    compute, AssignmentEngine, Label, LabelMatcher, MatchKind, StrictMatcher, UnknownAwareMatcher,
};

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u64) -> usize {
        usize::try_from(self.next() % n).unwrap()
    }
}

fn random_labels(rng: &mut XorShift, max_len: u64, alphabet: &[&str]) -> Vec<Label> {
    let len = rng.below(max_len + 1);
    (0..len)
        .map(|_| {
            let pick = alphabet[rng.below(alphabet.len() as u64)];
            if pick == "?" {
                Label::unknown(rng.next())
            } else {
                Label::named(pick)
            }
        })
        .collect()
}

/// Maximum number of matched pairs over every one-to-one pairing.
fn brute_force_max_matches<M: LabelMatcher<Label>>(
    reference: &[Label],
    hypothesis: &[Label],
    matcher: &M,
) -> usize {
    fn search<M: LabelMatcher<Label>>(
        r: usize,
        reference: &[Label],
        hypothesis: &[Label],
        used: &mut [bool],
        matcher: &M,
    ) -> usize {
        if r == reference.len() {
            return 0;
        }

        // Leave reference r unpaired (or paired with padding)
        let mut best = search(r + 1, reference, hypothesis, used, matcher);
        for h in 0..hypothesis.len() {
            if used[h] {
                continue;
            }
            used[h] = true;
            let gain = usize::from(matcher.matches(&reference[r], &hypothesis[h]));
            best = best.max(gain + search(r + 1, reference, hypothesis, used, matcher));
            used[h] = false;
        }
        best
    }

    let mut used = vec![false; hypothesis.len()];
    search(0, reference, hypothesis, &mut used, matcher)
}

#[test]
fn test_conservation() {
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    let engine = AssignmentEngine::unknown_aware();

    for _ in 0..300 {
        let reference = random_labels(&mut rng, 8, &["A", "B", "C", "?"]);
        let hypothesis = random_labels(&mut rng, 8, &["A", "B", "D", "?"]);
        let outcome = engine.compute(&reference, &hypothesis).unwrap();
        let counts = outcome.counts;

        assert_eq!(
            counts.assigned(),
            reference.len().max(hypothesis.len()),
            "reference={reference:?} hypothesis={hypothesis:?}"
        );
        assert_eq!(counts.total, reference.len());

        for kind in MatchKind::ALL {
            assert_eq!(counts.get(kind), outcome.details.len(kind));
        }

        // Every real item appears exactly once across the details
        let reference_seen = counts.correct + counts.confusion + counts.missed_detection;
        let hypothesis_seen = counts.correct + counts.confusion + counts.false_alarm;
        assert_eq!(reference_seen, reference.len());
        assert_eq!(hypothesis_seen, hypothesis.len());
    }
}

#[test]
fn test_optimality_against_brute_force() {
    let mut rng = XorShift(0x2545_f491_4f6c_dd1d);

    for _ in 0..200 {
        let reference = random_labels(&mut rng, 6, &["A", "B", "C", "?"]);
        let hypothesis = random_labels(&mut rng, 6, &["A", "B", "C", "?"]);

        let strict = AssignmentEngine::strict()
            .compute(&reference, &hypothesis)
            .unwrap();
        assert_eq!(
            strict.counts.correct,
            brute_force_max_matches(&reference, &hypothesis, &StrictMatcher),
            "strict: reference={reference:?} hypothesis={hypothesis:?}"
        );

        let aware = AssignmentEngine::unknown_aware()
            .compute(&reference, &hypothesis)
            .unwrap();
        assert_eq!(
            aware.counts.correct,
            brute_force_max_matches(&reference, &hypothesis, &UnknownAwareMatcher),
            "unknown-aware: reference={reference:?} hypothesis={hypothesis:?}"
        );
    }
}

#[test]
fn test_optimality_with_overlapping_matcher() {
    // A matcher under which one reference can match several hypotheses,
    // so a greedy pairing can lose matches
    let prefix = |r: &String, h: &String| h.starts_with(r.as_str());
    let reference: Vec<String> = ["a", "ab", "abc"].iter().map(ToString::to_string).collect();
    let hypothesis: Vec<String> = ["abc", "ab", "a"].iter().map(ToString::to_string).collect();

    let outcome = AssignmentEngine::new(prefix)
        .compute(&reference, &hypothesis)
        .unwrap();
    assert_eq!(outcome.counts.correct, 3);
    assert_eq!(outcome.counts.confusion, 0);
}

#[test]
fn test_deterministic_counts() {
    let reference: Vec<Label> = ["A", "B", "A", "C", "B"].iter().map(|&s| s.into()).collect();
    let hypothesis: Vec<Label> = ["B", "A", "D", "A"].iter().map(|&s| s.into()).collect();

    let first = compute(&reference, &hypothesis).unwrap().counts;
    for _ in 0..20 {
        assert_eq!(compute(&reference, &hypothesis).unwrap().counts, first);
    }
    assert_eq!(first.correct, 3);
    assert_eq!(first.confusion, 1);
    assert_eq!(first.missed_detection, 1);
    assert_eq!(first.false_alarm, 0);
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = Arc::new(AssignmentEngine::unknown_aware());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let reference: Vec<Label> = (0..i).map(|j| Label::named(j.to_string())).collect();
                let hypothesis: Vec<Label> =
                    (0..2 * i).map(|j| Label::named(j.to_string())).collect();
                let outcome = engine.compute(&reference, &hypothesis).unwrap();
                (i, outcome.counts)
            })
        })
        .collect();

    for handle in handles {
        let (i, counts) = handle.join().unwrap();
        assert_eq!(counts.correct, i);
        assert_eq!(counts.false_alarm, i);
        assert_eq!(counts.total, i);
    }
}

#[test]
fn test_unknown_never_matches_named() {
    let reference = vec![Label::unknown(0), Label::named("A")];
    let hypothesis = vec![Label::named("B"), Label::unknown(1)];

    let outcome = AssignmentEngine::unknown_aware()
        .compute(&reference, &hypothesis)
        .unwrap();
    assert_eq!(outcome.counts.correct, 1);
    assert_eq!(outcome.counts.confusion, 1);
    assert_eq!(
        outcome.details.confusion,
        vec![(Label::named("A"), Label::named("B"))]
    );
}
