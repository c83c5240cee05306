//! # Game Mathematics
//!
//! Chance helpers shared by room resolution.

use rand::Rng;

/// Rolls a percent chance. `0` never succeeds and `100` or more always does.
///
/// # Examples
///
/// ```
/// use burrow::roll_percent;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert!(roll_percent(&mut rng, 100));
/// assert!(!roll_percent(&mut rng, 0));
/// ```
pub fn roll_percent<R: Rng + ?Sized>(rng: &mut R, percent: u32) -> bool {
    rng.gen_range(0..100) < percent
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_percent_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            assert!(roll_percent(&mut rng, 100));
            assert!(!roll_percent(&mut rng, 0));
        }
    }

    #[test]
    fn test_roll_percent_is_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(5);
        let hits = (0..10_000).filter(|_| roll_percent(&mut rng, 25)).count();
        assert!((2_000..3_000).contains(&hits), "hits = {}", hits);
    }
}
