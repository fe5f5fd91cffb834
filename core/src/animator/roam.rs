//! Random source for dolphin roam decisions

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies the random choices behind each roam decision
///
/// The animator asks once per decision whether the dolphin holds still, and
/// when it does not, asks for one step direction per axis (x, y, z in order).
pub trait RoamSource {
    /// `true` keeps the dolphin where it is
    fn should_stop(&mut self) -> bool;

    /// Step direction for one axis: -1, 0 or +1
    fn offset_step(&mut self) -> i8;
}

/// Seedable PCG-backed roam source
#[derive(Debug, Clone)]
pub struct PcgRoam {
    rng: Pcg32,
}

impl PcgRoam {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(Pcg32::seed_from_u64(seed))
    }

    /// Continue an existing generator's stream
    pub fn from_rng(rng: Pcg32) -> Self {
        Self { rng }
    }
}

impl RoamSource for PcgRoam {
    fn should_stop(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn offset_step(&mut self) -> i8 {
        self.rng.random_range(-1..=1)
    }
}

impl<R: RoamSource + ?Sized> RoamSource for &mut R {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn offset_step(&mut self) -> i8 {
        (**self).offset_step()
    }
}
