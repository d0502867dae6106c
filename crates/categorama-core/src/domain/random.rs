//! Random identifiers and letters

use rand::Rng;

/// Length of a generated category id
pub const CATEGORY_ID_LEN: usize = 20;

pub(crate) const LOWER_ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub(crate) const MIXED_ALNUM: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw `len` characters uniformly from `alphabet`.
pub(crate) fn random_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0..alphabet.len());
        out.push(alphabet[idx] as char);
    }
    out
}

/// A fresh 20-character `[a-z0-9]` category id
pub fn random_category_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_string(rng, LOWER_ALNUM, CATEGORY_ID_LEN)
}

/// A single uppercase prompt letter
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    LETTERS[rng.gen_range(0..LETTERS.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_category_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = random_category_id(&mut rng);
            assert_eq!(id.len(), CATEGORY_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_letter_is_uppercase() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert!(random_letter(&mut rng).is_ascii_uppercase());
        }
    }
}
