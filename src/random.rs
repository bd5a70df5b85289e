use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Entropy source for a session: seeded when `seed` is given, OS entropy otherwise.
pub fn entropy(seed: Option<u64>) -> StdRng
{
    match seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded entropy");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Picks one element uniformly at random. `None` only for an empty slice.
pub fn choose<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
