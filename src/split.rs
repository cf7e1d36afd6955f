//! Random shuffle and train/test partition.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniformly shuffle `data` and split it into `(train, test)` at
/// `floor(ratio * len)`.
///
/// Every input element lands in exactly one of the two halves. Passing a
/// seed makes the permutation reproducible; tests rely on that.
pub fn shuffle_and_split<T>(mut data: Vec<T>, ratio: f64, seed: Option<u64>) -> (Vec<T>, Vec<T>) {
    match seed {
        Some(s) => data.shuffle(&mut StdRng::seed_from_u64(s)),
        None => data.shuffle(&mut rand::thread_rng()),
    }

    let split_index = ((ratio * data.len() as f64).floor() as usize).min(data.len());
    let test = data.split_off(split_index);
    (data, test)
}
