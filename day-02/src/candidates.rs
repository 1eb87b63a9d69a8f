use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::ranges::RangeSet;

/// How many times a base numeral may be written out to form a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// `12` -> `1212` only.
    Twice,
    /// `12` -> `1212`, `121212`, `12121212`, ...
    AtLeastTwice,
}

impl RepeatPolicy {
    fn allows(self, repeats: usize) -> bool {
        match self {
            RepeatPolicy::Twice => repeats == 2,
            RepeatPolicy::AtLeastTwice => repeats >= 2,
        }
    }
}

/// Lazily yields every number whose decimal form is a base numeral written
/// out repeatedly, ordered by base and then by repeat count, never exceeding
/// `max_id`.
///
/// Appending the base once more is `candidate * 10^digits(base) + base`,
/// which is the same number as concatenating the decimal strings.
#[derive(Debug, Clone)]
pub struct RepeatedDigits {
    max_id: BigUint,
    policy: RepeatPolicy,
    base: BigUint,
    /// `10^digits(base)`
    shift: BigUint,
    /// Last candidate yielded for the current base and its repeat count.
    current: Option<(BigUint, usize)>,
    done: bool,
}

impl RepeatedDigits {
    pub fn new(max_id: BigUint, policy: RepeatPolicy) -> Self {
        Self {
            max_id,
            policy,
            base: BigUint::one(),
            shift: BigUint::from(10u32),
            current: None,
            done: false,
        }
    }

    fn append_base(&self, candidate: &BigUint) -> BigUint {
        candidate * &self.shift + &self.base
    }

    fn next_base(&mut self) {
        self.base += 1u32;
        if self.base == self.shift {
            self.shift *= 10u32;
        }
    }
}

impl Iterator for RepeatedDigits {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some((candidate, repeats)) = self.current.take() {
            if self.policy.allows(repeats + 1) {
                let grown = self.append_base(&candidate);
                if grown <= self.max_id {
                    self.current = Some((grown.clone(), repeats + 1));
                    return Some(grown);
                }
            }
            self.next_base();
        }

        // Doubling is the smallest candidate for a base and grows with the
        // base, so once it overshoots every later base does too.
        let doubled = self.append_base(&self.base);
        if doubled > self.max_id {
            self.done = true;
            return None;
        }

        self.current = Some((doubled.clone(), 2));
        Some(doubled)
    }
}

/// Sums every distinct candidate that falls inside at least one range.
#[tracing::instrument(skip(ranges), fields(range_count = ranges.len()))]
pub fn sum_invalid_ids(ranges: &RangeSet, policy: RepeatPolicy) -> BigUint {
    let max_id = ranges.max_id();
    debug!(%max_id, "generating candidates");

    let invalid_ids = RepeatedDigits::new(max_id, policy)
        .filter(|candidate| ranges.contains(candidate))
        .collect::<BTreeSet<_>>();

    debug!(count = invalid_ids.len(), "found invalid ids");
    invalid_ids.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::Range;
    use rstest::rstest;

    fn candidates(max_id: u64, policy: RepeatPolicy) -> Vec<u64> {
        RepeatedDigits::new(BigUint::from(max_id), policy)
            .map(|candidate| candidate.to_string().parse::<u64>().unwrap())
            .collect()
    }

    #[test]
    fn test_candidates_up_to_1000() {
        let expected = (1..=9u64)
            .flat_map(|digit| [digit * 11, digit * 111])
            .collect::<Vec<_>>();
        assert_eq!(expected, candidates(1000, RepeatPolicy::AtLeastTwice));
    }

    #[test]
    fn test_candidates_twice_only() {
        let expected = (1..=9u64).map(|digit| digit * 11).collect::<Vec<_>>();
        assert_eq!(expected, candidates(1000, RepeatPolicy::Twice));
    }

    #[test]
    fn test_candidates_cross_base_width() {
        let found = candidates(101_010, RepeatPolicy::AtLeastTwice);
        assert!(found.contains(&1010));
        assert!(found.contains(&101_010));
        assert!(found.contains(&9999));
        assert!(!found.contains(&1_111_111));
        assert_eq!(Some(&101_010), found.iter().max());
    }

    #[test]
    fn test_candidates_match_string_repetition() {
        let generator =
            RepeatedDigits::new(BigUint::from(10_000_000u32), RepeatPolicy::AtLeastTwice);
        for candidate in generator {
            let digits = candidate.to_string();
            let is_repetition = (1..=digits.len() / 2).any(|width| {
                digits.len() % width == 0
                    && digits[..width].repeat(digits.len() / width) == digits
            });
            assert!(is_repetition, "{digits} is not a repeated numeral");
        }
    }

    #[rstest]
    #[case(1u32, 2)]
    #[case(7u32, 5)]
    #[case(12u32, 3)]
    #[case(90u32, 2)]
    #[case(123u32, 4)]
    fn test_append_base_matches_concatenation(#[case] base: u32, #[case] repeats: usize) {
        let mut generator = RepeatedDigits::new(BigUint::default(), RepeatPolicy::AtLeastTwice);
        while generator.base != BigUint::from(base) {
            generator.next_base();
        }

        let mut candidate = generator.base.clone();
        for _ in 1..repeats {
            candidate = generator.append_base(&candidate);
        }

        let literal = base.to_string().repeat(repeats).parse::<BigUint>().unwrap();
        assert_eq!(literal, candidate);
    }

    #[test]
    fn test_candidates_increase_per_base() {
        let found = candidates(1_000_000_000, RepeatPolicy::AtLeastTwice);
        let ones = found
            .iter()
            .take_while(|&&candidate| candidate.to_string().chars().all(|c| c == '1'))
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(
            vec![11, 111, 1111, 11111, 111111, 1111111, 11111111, 111111111],
            ones
        );
    }

    #[test]
    fn test_candidates_terminate_below_first() {
        assert_eq!(0, candidates(10, RepeatPolicy::AtLeastTwice).len());
        assert_eq!(vec![11], candidates(11, RepeatPolicy::AtLeastTwice));
    }

    #[rstest]
    #[case(vec![Range::new(10u32, 50u32)], RepeatPolicy::AtLeastTwice, 110u32)]
    #[case(vec![Range::new(100u32, 200u32), Range::new(300u32, 400u32)], RepeatPolicy::AtLeastTwice, 444u32)]
    #[case(vec![Range::new(100u32, 200u32), Range::new(300u32, 400u32)], RepeatPolicy::Twice, 0u32)]
    #[case(vec![Range::new(11u32, 22u32), Range::new(22u32, 33u32)], RepeatPolicy::AtLeastTwice, 66u32)]
    #[case(vec![Range::new(1111u32, 1111u32)], RepeatPolicy::Twice, 1111u32)]
    #[case(vec![Range::new(1u32, 9u32)], RepeatPolicy::AtLeastTwice, 0u32)]
    #[case(vec![], RepeatPolicy::AtLeastTwice, 0u32)]
    fn test_sum_invalid_ids(
        #[case] ranges: Vec<Range>,
        #[case] policy: RepeatPolicy,
        #[case] expected: u32,
    ) {
        let ranges = RangeSet::new(ranges);
        assert_eq!(BigUint::from(expected), sum_invalid_ids(&ranges, policy));
    }
}
