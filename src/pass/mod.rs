//! Password generation and output.

mod assemble;
mod charset;
pub mod output;
mod password;
mod pool;
mod selection;
mod strength;

use rand::CryptoRng;

pub use assemble::assemble;
pub use charset::{Alphabets, CharClass};
pub use password::GeneratedPassword;
pub use pool::{CharacterPool, MandatorySet, PoolBuilder};
pub use selection::Selection;
pub use strength::{Strength, classify};

use crate::error::GenerateError;

/// Build the pool for `selection` and assemble a password of `length` characters.
pub fn generate<R: CryptoRng + ?Sized>(
    alphabets: Alphabets<'_>,
    selection: &Selection,
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerateError> {
    let (pool, mandatory) = PoolBuilder::new(alphabets).build(selection, rng)?;
    assemble(&pool, mandatory, length, rng)
}
