//! Bounding extrema and the quantities derived from them

use glam::Vec3;
use serde::Deserialize;

/// Starting value for extremum tracking
///
/// `Origin` seeds min and max at zero, so a mesh lying entirely on one side of
/// an axis reports zero as its near extent on that axis. `FirstVertex` seeds
/// from the first vertex read and reports the true extents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundsSeed {
    #[default]
    Origin,
    FirstVertex,
}

/// Component-wise vertex extrema
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Extrema sum per axis (not the midpoint)
    pub fn origin(&self) -> Vec3 {
        self.min + self.max
    }

    /// Translation that moves the mesh near the world origin: `-origin / 2`
    pub fn centering_offset(&self) -> Vec3 {
        -self.origin() / 2.0
    }

    /// `(|min| + |max|) / 2` per axis
    pub fn half_extents(&self) -> Vec3 {
        (self.min.abs() + self.max.abs()) / 2.0
    }

    /// Largest of the three half extents
    pub fn max_half_extent(&self) -> f32 {
        self.half_extents().max_element()
    }
}

/// Incremental extremum tracker, updated as each vertex is read
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundsTracker {
    bounds: Option<Bounds>,
}

impl BoundsTracker {
    pub(crate) fn new(seed: BoundsSeed) -> Self {
        let bounds = match seed {
            BoundsSeed::Origin => Some(Bounds::default()),
            BoundsSeed::FirstVertex => None,
        };
        Self { bounds }
    }

    pub(crate) fn include(&mut self, v: Vec3) {
        match &mut self.bounds {
            Some(b) => {
                b.min = b.min.min(v);
                b.max = b.max.max(v);
            }
            None => self.bounds = Some(Bounds { min: v, max: v }),
        }
    }

    /// Final extrema; an empty mesh yields all zeros
    pub(crate) fn finish(self) -> Bounds {
        self.bounds.unwrap_or_default()
    }
}
