//! Actor slot table
//!
//! Barrels are scattered across the sea floor, each scattered barrel hosts a
//! pair of circling fish, and the last few barrel slots mark fixed directions
//! around the origin.

use glam::Vec3;
use rand::Rng;

use crate::placement::ActorPlacement;

/// Total barrel slots, including indicators
pub const BARREL_COUNT: usize = 36;

/// Barrel slots at the end of the table used as direction indicators
pub const INDICATOR_COUNT: usize = 6;

/// Barrels that receive a random position and a fish pair
pub const SCATTERED_BARREL_COUNT: usize = BARREL_COUNT - INDICATOR_COUNT;

/// Fish slots, two per scattered barrel
pub const FISH_COUNT: usize = SCATTERED_BARREL_COUNT * 2;

/// Fixed indicator positions: origin, four corners, front
const INDICATOR_POSITIONS: [Vec3; INDICATOR_COUNT] = [
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(-1.0, 0.0, -1.0),
    Vec3::new(1.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -0.5),
];

/// Index into the barrel table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BarrelSlot(pub usize);

/// Index into the fish table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FishSlot(pub usize);

impl BarrelSlot {
    pub fn is_indicator(self) -> bool {
        self.0 >= SCATTERED_BARREL_COUNT
    }
}

/// The fish pair hosted by a barrel, `None` for indicators and out-of-table slots
pub fn fish_slots_for(barrel: BarrelSlot) -> Option<(FishSlot, FishSlot)> {
    if barrel.0 >= SCATTERED_BARREL_COUNT {
        return None;
    }
    Some((FishSlot(barrel.0 * 2), FishSlot(barrel.0 * 2 + 1)))
}

/// Placements for every actor in the scene
#[derive(Debug, Clone)]
pub struct SceneLayout {
    barrels: [ActorPlacement; BARREL_COUNT],
    fish: [ActorPlacement; FISH_COUNT],
    dolphin: ActorPlacement,
}

impl SceneLayout {
    /// Scatter barrels using `rng` and place the indicators
    ///
    /// Scattered barrels land on a 0.1 grid in [-20, 20) on x and z; both of a
    /// barrel's fish start at the barrel.
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut layout = Self {
            barrels: [ActorPlacement::default(); BARREL_COUNT],
            fish: [ActorPlacement::default(); FISH_COUNT],
            dolphin: ActorPlacement::default(),
        };

        for i in 0..SCATTERED_BARREL_COUNT {
            let x = grid_coordinate(rng);
            let z = grid_coordinate(rng);
            layout.place_barrel(BarrelSlot(i), Vec3::new(x, 0.0, z));
        }
        for (i, pos) in INDICATOR_POSITIONS.iter().enumerate() {
            layout.place_barrel(BarrelSlot(SCATTERED_BARREL_COUNT + i), *pos);
        }

        layout
    }

    /// Move a barrel and the fish it hosts
    ///
    /// Returns `false` and changes nothing when `slot` is outside the table.
    pub fn place_barrel(&mut self, slot: BarrelSlot, position: Vec3) -> bool {
        let Some(barrel) = self.barrels.get_mut(slot.0) else {
            return false;
        };
        barrel.set_position(position.x, position.y, position.z);
        if let Some((a, b)) = fish_slots_for(slot) {
            self.fish[a.0].set_position(position.x, position.y, position.z);
            self.fish[b.0].set_position(position.x, position.y, position.z);
        }
        true
    }

    pub fn barrel(&self, slot: BarrelSlot) -> Option<&ActorPlacement> {
        self.barrels.get(slot.0)
    }

    pub fn fish(&self, slot: FishSlot) -> Option<&ActorPlacement> {
        self.fish.get(slot.0)
    }

    /// Placements of the fish pair hosted by a barrel
    pub fn fish_pair(&self, barrel: BarrelSlot) -> Option<(&ActorPlacement, &ActorPlacement)> {
        let (a, b) = fish_slots_for(barrel)?;
        Some((&self.fish[a.0], &self.fish[b.0]))
    }

    pub fn dolphin(&self) -> &ActorPlacement {
        &self.dolphin
    }

    /// Barrel slots and placements in table order
    pub fn barrels(&self) -> impl Iterator<Item = (BarrelSlot, &ActorPlacement)> {
        self.barrels
            .iter()
            .enumerate()
            .map(|(i, placement)| (BarrelSlot(i), placement))
    }
}

fn grid_coordinate<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.random_range(0..400) - 200) as f32 * 0.1
}
