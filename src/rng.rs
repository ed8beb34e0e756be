use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Create the simulation's random generator. A fixed seed makes a run
/// reproducible; without one the generator is seeded from the OS.
pub fn create_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}
