//! Random big numbers to render.

use log::debug;
use malachite::base::num::basic::traits::Zero;
use malachite::natural::Natural;
use rand::Rng;

const LIMB_BITS: u64 = u64::BITS as u64;

/// Draw a number uniformly from [0, 2^bits).
/// The number is assembled from random 64-bit limbs, most significant first,
/// with the top limb shifted down to the leftover bit count.
pub fn random_magnitude<R: Rng>(bits: u64, rng: &mut R) -> Natural {
    let full_limbs = bits / LIMB_BITS;
    let top_bits = bits % LIMB_BITS;

    let mut num = Natural::ZERO;
    if top_bits > 0 {
        num = Natural::from(rng.random::<u64>() >> (LIMB_BITS - top_bits));
    }
    for _ in 0..full_limbs {
        num <<= LIMB_BITS;
        num += Natural::from(rng.random::<u64>());
    }

    debug!("Drew a random magnitude of up to {bits} bits");
    num
}
