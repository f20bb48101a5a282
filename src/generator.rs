use rand::{CryptoRng, Rng};

use crate::{Alphabet, Error};

/// Generates `length` symbols drawn uniformly and independently from `alphabet`
/// using the thread-local, OS-seeded CSPRNG.
///
/// Fails with [`Error::InvalidLength`] when `length < 1`; no randomness is
/// consumed in that case.
pub fn generate(alphabet: &Alphabet, length: i64) -> Result<String, Error> {
    generate_with(alphabet, length, &mut rand::thread_rng())
}

/// Same as [`generate`] but draws from the supplied generator.
pub fn generate_with<R>(alphabet: &Alphabet, length: i64, rng: &mut R) -> Result<String, Error>
where
    R: Rng + CryptoRng,
{
    let count = usize::try_from(length)
        .ok()
        .filter(|count| *count > 0)
        .ok_or(Error::InvalidLength(length))?;
    let capacity = count
        .checked_mul(alphabet.max_symbol_width())
        .ok_or(Error::InvalidLength(length))?;

    log::trace!(
        "Generating {} symbols from an alphabet of {}",
        count,
        alphabet.len()
    );

    let mut out = String::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| Error::InvalidLength(length))?;

    let symbols = alphabet.symbols();
    for _ in 0..count {
        // gen_range rejects out-of-zone samples, so every index is equally likely
        out.push(symbols[rng.gen_range(0..symbols.len())]);
    }
    Ok(out)
}
