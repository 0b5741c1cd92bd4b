//! Password assembly: mandatory characters plus sampled filler, then shuffled.

use log::trace;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use super::{CharacterPool, GeneratedPassword, MandatorySet};
use crate::error::GenerateError;

/// Fill `mandatory` up to `length` from `pool` and shuffle the result.
pub fn assemble<R: CryptoRng + ?Sized>(
    pool: &CharacterPool,
    mandatory: MandatorySet,
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerateError> {
    let required = mandatory.len();
    if length < required {
        return Err(GenerateError::LengthTooShort { length, required });
    }
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let chars = pool.as_slice();
    let mut working: Vec<char> = Vec::new();
    working
        .try_reserve_exact(length)
        .map_err(|_| GenerateError::LengthTooLong { length })?;
    working.extend_from_slice(mandatory.as_slice());
    drop(mandatory);

    for _ in required..length {
        working.push(chars[rng.random_range(0..chars.len())]);
    }

    working.shuffle(rng);

    let text: String = working.iter().collect();
    working.zeroize();

    trace!("assembled {length} chars ({required} mandatory)");
    Ok(GeneratedPassword::new(text))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::{Alphabets, CharClass, PoolBuilder, Selection, generate};

    fn gen_with(selection: &Selection, length: usize) -> GeneratedPassword {
        let mut rng = rand::rng();
        generate(Alphabets::STANDARD, selection, length, &mut rng).unwrap()
    }

    #[test]
    fn length_is_exact() {
        for length in [4, 6, 8, 12, 64, 256] {
            let pass = gen_with(&Selection::default(), length);
            assert_eq!(pass.len(), length);
        }
    }

    #[test]
    fn length_equal_to_mandatory_count_is_allowed() {
        let mut rng = StdRng::seed_from_u64(9);
        let (pool, mandatory) = PoolBuilder::new(Alphabets::STANDARD)
            .build(&Selection::default(), &mut rng)
            .unwrap();
        let pass = assemble(&pool, mandatory, 4, &mut rng).unwrap();
        assert_eq!(pass.len(), 4);
    }

    #[test]
    fn too_short_for_mandatory() {
        let mut rng = StdRng::seed_from_u64(9);
        let (pool, mandatory) = PoolBuilder::new(Alphabets::STANDARD)
            .build(&Selection::default(), &mut rng)
            .unwrap();
        let result = assemble(&pool, mandatory, 3, &mut rng);
        assert_eq!(
            result.err(),
            Some(GenerateError::LengthTooShort {
                length: 3,
                required: 4
            })
        );
    }

    #[test]
    fn unallocatable_length_is_an_error() {
        let mut rng = rand::rng();
        let length = usize::MAX / 2;
        let result = generate(Alphabets::STANDARD, &Selection::default(), length, &mut rng);
        assert_eq!(result.err(), Some(GenerateError::LengthTooLong { length }));
    }

    #[test]
    fn every_selected_class_is_present() {
        let a = Alphabets::STANDARD;
        let selections = [
            Selection::default(),
            Selection {
                exclude_ambiguous: true,
                ..Selection::default()
            },
            Selection {
                upper: false,
                punctuation: false,
                ..Selection::default()
            },
            Selection {
                lower: false,
                digits: false,
                exclude_ambiguous: true,
                ..Selection::default()
            },
        ];

        for sel in &selections {
            for _ in 0..200 {
                let pass = gen_with(sel, 6);
                for class in sel.classes() {
                    let alphabet = a.filtered(class, sel.exclude_ambiguous);
                    assert!(
                        pass.as_str().chars().any(|c| alphabet.contains(&c)),
                        "missing {class}"
                    );
                }
                for class in CharClass::ALL.into_iter().filter(|&c| !sel.is_selected(c)) {
                    assert!(!pass.as_str().chars().any(|c| a.of(class).contains(c)));
                }
            }
        }
    }

    #[test]
    fn excluded_ambiguous_never_appear() {
        let a = Alphabets::STANDARD;
        let sel = Selection {
            exclude_ambiguous: true,
            ..Selection::default()
        };
        for _ in 0..200 {
            let pass = gen_with(&sel, 32);
            assert!(pass.as_str().chars().all(|c| !a.is_ambiguous(c)));
        }
    }

    #[test]
    fn repeated_runs_differ() {
        let seen: HashSet<String> = (0..100)
            .map(|_| gen_with(&Selection::default(), 16).as_str().to_owned())
            .collect();
        assert!(seen.len() >= 99);
    }

    #[test]
    fn mandatory_position_is_shuffled() {
        // Upper + digits at length 2: without a shuffle the uppercase would always lead.
        let sel = Selection {
            upper: true,
            lower: false,
            digits: true,
            punctuation: false,
            exclude_ambiguous: false,
        };
        let digit_first = (0..400)
            .filter(|_| {
                gen_with(&sel, 2)
                    .as_str()
                    .starts_with(|c: char| c.is_ascii_digit())
            })
            .count();
        assert!((100..300).contains(&digit_first), "digit led {digit_first}/400");
    }
}
