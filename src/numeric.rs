use crate::prng::RandomSource;
use tracing::debug;

/// Number of visible terms in a numeric round.
pub const VISIBLE_TERMS: usize = 4;

/// Score above which fibonacci and square sequences join the pool.
pub const FIBONACCI_SQUARE_ABOVE: u32 = 4;
/// Score above which cube and triangular sequences join the pool.
pub const CUBE_TRIANGULAR_ABOVE: u32 = 8;
/// Score above which every family is eligible.
pub const FULL_SET_ABOVE: u32 = 12;

/// Rule that produces a numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SequenceFamily {
    Arithmetic,
    Geometric,
    Fibonacci,
    Square,
    Cube,
    Triangular,
}

impl SequenceFamily {
    pub const ALL: [SequenceFamily; 6] = [
        SequenceFamily::Arithmetic,
        SequenceFamily::Geometric,
        SequenceFamily::Fibonacci,
        SequenceFamily::Square,
        SequenceFamily::Cube,
        SequenceFamily::Triangular,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SequenceFamily::Arithmetic => "arithmetic",
            SequenceFamily::Geometric => "geometric",
            SequenceFamily::Fibonacci => "fibonacci",
            SequenceFamily::Square => "square",
            SequenceFamily::Cube => "cube",
            SequenceFamily::Triangular => "triangular",
        }
    }

    /// Rule description shown after a wrong answer.
    pub fn hint_text(self) -> &'static str {
        match self {
            SequenceFamily::Arithmetic => "Hint: Constant difference (adding same number)",
            SequenceFamily::Geometric => "Hint: Constant ratio (multiplying by same number)",
            SequenceFamily::Fibonacci => "Hint: Sum of the previous two numbers",
            SequenceFamily::Square => "Hint: Sequence of Perfect Squares (n²)",
            SequenceFamily::Cube => "Hint: Sequence of Perfect Cubes (n³)",
            SequenceFamily::Triangular => "Hint: Triangular numbers (Add 1, then 2, then 3...)",
        }
    }

    /// Draw seed parameters and derive four terms plus the hidden fifth.
    pub fn generate(self, rng: &mut impl RandomSource) -> ([i64; VISIBLE_TERMS], i64) {
        let mut terms = [0i64; VISIBLE_TERMS];
        let next = match self {
            SequenceFamily::Arithmetic => {
                let start = rng.range_inclusive(1, 20);
                let step = rng.range_inclusive(2, 6);
                for (i, t) in terms.iter_mut().enumerate() {
                    *t = start + i as i64 * step;
                }
                terms[3] + step
            }
            SequenceFamily::Geometric => {
                let start = rng.range_inclusive(1, 5);
                let ratio = rng.range_inclusive(2, 3);
                let mut v = start;
                for t in terms.iter_mut() {
                    *t = v;
                    v *= ratio;
                }
                terms[3] * ratio
            }
            SequenceFamily::Fibonacci => {
                let n1 = rng.range_inclusive(1, 5);
                let n2 = rng.range_inclusive(1, 5);
                // Five-term buffer from the two seeds; the oldest term is dropped.
                let mut buf = vec![n1, n2];
                for _ in 0..3 {
                    let k = buf.len();
                    buf.push(buf[k - 1] + buf[k - 2]);
                }
                terms.copy_from_slice(&buf[buf.len() - VISIBLE_TERMS..]);
                terms[3] + terms[2]
            }
            SequenceFamily::Square => {
                let start = rng.range_inclusive(2, 6);
                for (i, t) in terms.iter_mut().enumerate() {
                    *t = (start + i as i64).pow(2);
                }
                (start + 4).pow(2)
            }
            SequenceFamily::Cube => {
                let start = rng.range_inclusive(1, 3);
                for (i, t) in terms.iter_mut().enumerate() {
                    *t = (start + i as i64).pow(3);
                }
                (start + 4).pow(3)
            }
            SequenceFamily::Triangular => {
                let start = rng.range_inclusive(1, 3);
                for (i, t) in terms.iter_mut().enumerate() {
                    *t = triangular(start + i as i64);
                }
                triangular(start + 4)
            }
        };
        (terms, next)
    }

    /// Apply the family's forward rule to four consecutive terms.
    pub fn extrapolate(self, terms: &[i64; VISIBLE_TERMS]) -> i64 {
        let last = terms[3];
        match self {
            SequenceFamily::Arithmetic => last + (last - terms[2]),
            SequenceFamily::Geometric => last * last.checked_div(terms[2]).unwrap_or(0),
            SequenceFamily::Fibonacci => last + terms[2],
            SequenceFamily::Square => (root(last, 2) + 1).pow(2),
            SequenceFamily::Cube => (root(last, 3) + 1).pow(3),
            SequenceFamily::Triangular => {
                // T(n) = n(n+1)/2, so T(n+1) = T(n) + n + 1.
                let n = ((((8 * last + 1) as f64).sqrt() - 1.0) / 2.0).round() as i64;
                last + n + 1
            }
        }
    }
}

fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}

fn root(v: i64, degree: u32) -> i64 {
    (v as f64).powf(1.0 / degree as f64).round() as i64
}

/// Families eligible at `score`. The set only grows with score.
pub fn eligible_families(score: u32) -> Vec<SequenceFamily> {
    let mut families = vec![SequenceFamily::Arithmetic, SequenceFamily::Geometric];
    if score > FIBONACCI_SQUARE_ABOVE {
        families.extend([SequenceFamily::Fibonacci, SequenceFamily::Square]);
    }
    if score > CUBE_TRIANGULAR_ABOVE {
        families.extend([SequenceFamily::Cube, SequenceFamily::Triangular]);
    }
    if score > FULL_SET_ABOVE {
        for f in SequenceFamily::ALL {
            if !families.contains(&f) {
                families.push(f);
            }
        }
    }
    families
}

/// One numeric question: four visible terms and the value that follows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberRound {
    pub family: SequenceFamily,
    pub terms: [i64; VISIBLE_TERMS],
    pub answer: i64,
}

impl NumberRound {
    /// Pick a family eligible at `score` and draw its terms.
    pub fn generate(score: u32, rng: &mut impl RandomSource) -> Self {
        let families = eligible_families(score);
        let family = families[rng.below(families.len())];
        let (terms, answer) = family.generate(rng);
        debug!(family = family.label(), ?terms, answer, "number round");
        Self {
            family,
            terms,
            answer,
        }
    }

    pub fn display_terms(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.to_string()).collect()
    }

    pub fn is_correct(&self, guess: i64) -> bool {
        guess == self.answer
    }
}

/// Read a guess the way a lenient text box does: skip leading whitespace, accept an
/// optional sign and take the leading run of digits. Text without leading digits
/// yields `None`; digits beyond the `i64` range saturate.
pub fn parse_guess(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut digits = rest.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;
    let value = digits.fold(0i64, |acc, d| {
        let d = i64::from(d - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::{Prng, ScriptedRng};
    use std::collections::BTreeSet;

    fn set(score: u32) -> BTreeSet<SequenceFamily> {
        eligible_families(score).into_iter().collect()
    }

    #[test]
    fn base_tier_is_arithmetic_and_geometric() {
        assert_eq!(
            set(0),
            BTreeSet::from([SequenceFamily::Arithmetic, SequenceFamily::Geometric])
        );
        assert_eq!(set(4), set(0));
    }

    #[test]
    fn score_nine_unlocks_all_six() {
        assert_eq!(set(9), SequenceFamily::ALL.into_iter().collect());
    }

    #[test]
    fn gate_is_monotonic() {
        for s in 1..40 {
            assert!(set(s).is_superset(&set(s - 1)), "shrank at {s}");
        }
    }

    #[test]
    fn gate_lists_each_family_once() {
        for s in [0, 5, 9, 13, 100] {
            let v = eligible_families(s);
            assert_eq!(v.len(), set(s).len());
        }
    }

    #[test]
    fn arithmetic_start_three_step_two() {
        // family idx 0, start = 1 + 2, step = 2 + 0
        let mut rng = ScriptedRng::new(&[0, 2, 0]);
        let round = NumberRound::generate(0, &mut rng);
        assert_eq!(round.family, SequenceFamily::Arithmetic);
        assert_eq!(round.terms, [3, 5, 7, 9]);
        assert_eq!(round.answer, 11);
    }

    #[test]
    fn geometric_start_two_ratio_three() {
        // family idx 1, start = 1 + 1, ratio = 2 + 1
        let mut rng = ScriptedRng::new(&[1, 1, 1]);
        let round = NumberRound::generate(0, &mut rng);
        assert_eq!(round.family, SequenceFamily::Geometric);
        assert_eq!(round.terms, [2, 6, 18, 54]);
        assert_eq!(round.answer, 162);
    }

    #[test]
    fn fibonacci_drops_oldest_seed() {
        // n1 = 2, n2 = 3 -> buffer 2 3 5 8 13
        let mut rng = ScriptedRng::new(&[1, 2]);
        let (terms, next) = SequenceFamily::Fibonacci.generate(&mut rng);
        assert_eq!(terms, [3, 5, 8, 13]);
        assert_eq!(next, 21);
    }

    #[test]
    fn power_and_triangular_families() {
        let mut rng = ScriptedRng::new(&[0]);
        assert_eq!(
            SequenceFamily::Square.generate(&mut rng),
            ([4, 9, 16, 25], 36)
        );
        assert_eq!(
            SequenceFamily::Cube.generate(&mut rng),
            ([1, 8, 27, 64], 125)
        );
        assert_eq!(
            SequenceFamily::Triangular.generate(&mut rng),
            ([1, 3, 6, 10], 15)
        );
    }

    #[test]
    fn forward_rule_reproduces_answer() {
        let mut rng = Prng::new(2024);
        for score in [0, 10, 20, 100] {
            for _ in 0..500 {
                let round = NumberRound::generate(score, &mut rng);
                assert_eq!(
                    round.family.extrapolate(&round.terms),
                    round.answer,
                    "{round:?}"
                );
            }
        }
    }

    #[test]
    fn every_family_obeys_its_rule() {
        let mut rng = Prng::new(11);
        for family in SequenceFamily::ALL {
            for _ in 0..200 {
                let (terms, next) = family.generate(&mut rng);
                assert_eq!(family.extrapolate(&terms), next, "{family:?} {terms:?}");
            }
        }
    }

    #[test]
    fn parse_guess_is_lenient_about_trailing_text() {
        assert_eq!(parse_guess("42"), Some(42));
        assert_eq!(parse_guess("  17\n"), Some(17));
        assert_eq!(parse_guess("-8"), Some(-8));
        assert_eq!(parse_guess("12abc"), Some(12));
        assert_eq!(parse_guess("3.9"), Some(3));
    }

    #[test]
    fn parse_guess_rejects_non_numeric() {
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("abc"), None);
        assert_eq!(parse_guess("-"), None);
    }

    #[test]
    fn parse_guess_saturates_oversized_digits() {
        assert_eq!(parse_guess("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_guess("-99999999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_guess("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn hints_differ_per_family() {
        let hints: BTreeSet<_> = SequenceFamily::ALL.iter().map(|f| f.hint_text()).collect();
        assert_eq!(hints.len(), SequenceFamily::ALL.len());
    }
}
