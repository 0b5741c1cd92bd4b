//! Character pool building.

use log::debug;
use rand::CryptoRng;
use rand::seq::IndexedRandom;
use zeroize::Zeroize;

use super::{Alphabets, Selection};
use crate::error::GenerateError;

/// Every character eligible for random sampling. Duplicates are kept.
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for CharacterPool {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// One character per selected class, guaranteed to appear in the password.
pub struct MandatorySet(Vec<char>);

impl MandatorySet {
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Drop for MandatorySet {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

pub struct PoolBuilder<'a> {
    alphabets: Alphabets<'a>,
}

impl<'a> PoolBuilder<'a> {
    pub fn new(alphabets: Alphabets<'a>) -> Self {
        Self { alphabets }
    }

    /// Build the sampling pool and draw one mandatory character per selected class.
    pub fn build<R: CryptoRng + ?Sized>(
        &self,
        selection: &Selection,
        rng: &mut R,
    ) -> Result<(CharacterPool, MandatorySet), GenerateError> {
        let mut pool = CharacterPool(Vec::new());
        let mut mandatory = MandatorySet(Vec::with_capacity(selection.class_count()));
        let mut exhausted = None;

        for class in selection.classes() {
            let chars = self.alphabets.filtered(class, selection.exclude_ambiguous);
            match chars.choose(rng) {
                Some(&c) => mandatory.0.push(c),
                None => {
                    exhausted.get_or_insert(class);
                }
            }
            pool.0.extend_from_slice(&chars);
        }

        if pool.is_empty() {
            return Err(GenerateError::EmptyPool);
        }
        if let Some(class) = exhausted {
            return Err(GenerateError::ClassExhausted(class));
        }

        debug!(
            "pool built: {} chars, {} mandatory, exclude_ambiguous={}",
            pool.len(),
            mandatory.len(),
            selection.exclude_ambiguous
        );
        Ok((pool, mandatory))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharClass;

    fn select(upper: bool, lower: bool, digits: bool, punctuation: bool) -> Selection {
        Selection {
            upper,
            lower,
            digits,
            punctuation,
            exclude_ambiguous: false,
        }
    }

    #[test]
    fn all_classes_fill_the_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let (pool, mandatory) = PoolBuilder::new(Alphabets::STANDARD)
            .build(&Selection::default(), &mut rng)
            .unwrap();
        assert_eq!(pool.len(), 26 + 26 + 10 + 32);
        assert_eq!(mandatory.len(), 4);
    }

    #[test]
    fn mandatory_chars_follow_class_order() {
        let a = Alphabets::STANDARD;
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let (_, mandatory) = PoolBuilder::new(a)
                .build(&Selection::default(), &mut rng)
                .unwrap();
            for (c, class) in mandatory.as_slice().iter().zip(CharClass::ALL) {
                assert!(a.of(class).contains(*c), "{c:?} not in {class}");
            }
        }
    }

    #[test]
    fn unselected_classes_contribute_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let (pool, mandatory) = PoolBuilder::new(Alphabets::STANDARD)
            .build(&select(false, false, true, false), &mut rng)
            .unwrap();
        assert_eq!(pool.len(), 10);
        assert!(pool.as_slice().iter().all(char::is_ascii_digit));
        assert_eq!(mandatory.len(), 1);
    }

    #[test]
    fn ambiguous_exclusion_filters_pool_and_mandatory() {
        let a = Alphabets::STANDARD;
        let sel = Selection {
            exclude_ambiguous: true,
            ..Selection::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let (pool, mandatory) = PoolBuilder::new(a).build(&sel, &mut rng).unwrap();
            assert_eq!(pool.len(), 24 + 25 + 8 + 27);
            assert!(pool.as_slice().iter().all(|&c| !a.is_ambiguous(c)));
            assert!(mandatory.as_slice().iter().all(|&c| !a.is_ambiguous(c)));
        }
    }

    #[test]
    fn nothing_selected_is_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = PoolBuilder::new(Alphabets::STANDARD)
            .build(&select(false, false, false, false), &mut rng);
        assert_eq!(result.err(), Some(GenerateError::EmptyPool));
    }

    #[test]
    fn fully_ambiguous_alphabet_is_empty_pool() {
        let alphabets = Alphabets {
            digits: "01",
            ..Alphabets::STANDARD
        };
        let sel = Selection {
            exclude_ambiguous: true,
            ..select(false, false, true, false)
        };
        let mut rng = StdRng::seed_from_u64(1);
        let result = PoolBuilder::new(alphabets).build(&sel, &mut rng);
        assert_eq!(result.err(), Some(GenerateError::EmptyPool));
    }

    #[test]
    fn one_exhausted_class_is_reported() {
        let alphabets = Alphabets {
            upper: "OI",
            ..Alphabets::STANDARD
        };
        let sel = Selection {
            exclude_ambiguous: true,
            ..Selection::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let result = PoolBuilder::new(alphabets).build(&sel, &mut rng);
        assert_eq!(
            result.err(),
            Some(GenerateError::ClassExhausted(CharClass::Upper))
        );
    }
}
