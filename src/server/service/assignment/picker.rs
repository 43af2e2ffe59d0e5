//! Random reviewer selection.
//!
//! Every selection is a uniform shuffle of the candidate list followed by taking a
//! prefix. The generator is shared by all requests behind an async mutex, and can be
//! seeded so selections are reproducible.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared source of random reviewer picks.
///
/// Cloning is cheap; clones draw from the same generator.
#[derive(Clone)]
pub struct ReviewerPicker {
    rng: Arc<Mutex<StdRng>>,
}

impl ReviewerPicker {
    /// Creates a picker seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a picker with a fixed seed.
    ///
    /// Two pickers built from the same seed produce the same sequence of picks for the
    /// same sequence of inputs.
    ///
    /// # Arguments
    /// - `seed` - Seed for the underlying generator
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Picks up to `count` distinct candidates uniformly at random.
    ///
    /// # Arguments
    /// - `candidates` - Eligible user ids; expected to contain no duplicates
    /// - `count` - Maximum number of ids to return
    ///
    /// # Returns
    /// - `Vec<String>` - `min(count, candidates.len())` ids in shuffled order
    pub async fn pick(&self, mut candidates: Vec<String>, count: usize) -> Vec<String> {
        if candidates.is_empty() || count == 0 {
            return Vec::new();
        }

        let mut rng = self.rng.lock().await;
        candidates.shuffle(&mut *rng);
        candidates.truncate(count);

        candidates
    }
}

impl Default for ReviewerPicker {
    fn default() -> Self {
        Self::new()
    }
}
