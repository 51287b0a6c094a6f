mod eller;

pub use eller::{EllerMaze, Step};

use crate::rng::Arc4Rng;

/// Configuration for the Eller generator.
///
/// `width` is the only required, validated field. `height` of `None` means
/// the maze streams rows until the caller finalizes it. Probabilities are
/// taken as-is; values outside [0, 1] produce degenerate behavior (never or
/// always connecting) rather than an error.
#[derive(Debug, Clone)]
pub struct EllerConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows, or `None` for an unbounded maze.
    pub height: Option<usize>,
    /// Probability of keeping the wall between two differently-labeled
    /// adjacent columns on a non-final pass.
    pub wall_probability: f64,
    /// Target fraction of columns receiving a downward connection per row.
    pub floor_probability: f64,
    /// Seed text; `None` draws a fresh random seed per generator.
    pub seed: Option<String>,
}

impl EllerConfig {
    pub fn new(width: usize) -> Self {
        EllerConfig {
            width,
            height: None,
            wall_probability: 0.5,
            floor_probability: 0.5,
            seed: None,
        }
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_wall_probability(mut self, probability: f64) -> Self {
        self.wall_probability = probability;
        self
    }

    pub fn with_floor_probability(mut self, probability: f64) -> Self {
        self.floor_probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: impl ToString) -> Self {
        self.seed = Some(seed.to_string());
        self
    }
}

/// Build the seeded PRNG for a generator run, stringifying a freshly drawn
/// random value when no seed was configured.
fn seeded_rng(seed: Option<&str>) -> Arc4Rng {
    match seed {
        Some(s) => Arc4Rng::new(s),
        None => Arc4Rng::new(&rand::random::<f64>().to_string()),
    }
}
