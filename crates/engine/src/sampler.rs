//! Random selection of reminder words.

use rand::Rng;
use rand::seq::IndexedRandom;

use vocab_common::types::VocabWord;

/// Pick up to `count` distinct words at random.
///
/// A pool smaller than `count` is returned whole, each word once.
pub fn sample<'a, R>(words: &'a [VocabWord], count: usize, rng: &mut R) -> Vec<&'a VocabWord>
where
    R: Rng + ?Sized,
{
    words.choose_multiple(rng, count).collect()
}
