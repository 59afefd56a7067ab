use glam::Vec3;

use super::geometry::{Aabb, GeometryIndex};

pub const COURT_HALF_WIDTH: f32 = 30.0;
pub const COURT_HALF_LENGTH: f32 = 50.0;

/// Built-in court layout for hosts that have no scene loader: a floor slab,
/// one hoop stanchion behind each baseline and a scorer's table on the sideline.
///
/// The playable bound is the union of all pieces, so the stanchions also set
/// the ceiling the character box must stay under.
pub fn demo_court() -> GeometryIndex {
    let floor = Aabb::new(
        Vec3::new(-COURT_HALF_WIDTH, 0.0, -COURT_HALF_LENGTH),
        Vec3::new(COURT_HALF_WIDTH, 1.0, COURT_HALF_LENGTH),
    );
    let north_hoop = Aabb::from_center_size(
        Vec3::new(0.0, 10.0, COURT_HALF_LENGTH - 2.0),
        Vec3::new(2.0, 20.0, 2.0),
    );
    let south_hoop = Aabb::from_center_size(
        Vec3::new(0.0, 10.0, -COURT_HALF_LENGTH + 2.0),
        Vec3::new(2.0, 20.0, 2.0),
    );
    let scorers_table = Aabb::from_center_size(
        Vec3::new(COURT_HALF_WIDTH - 6.0, 5.0, 0.0),
        Vec3::new(4.0, 10.0, 8.0),
    );

    GeometryIndex::from_obstacles(vec![floor, north_hoop, south_hoop, scorers_table])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn test_spawn_is_free() {
        let config = SimConfig::default();
        let court = demo_court();
        let spawn_box = Aabb::from_center_size(config.spawn_position, config.character_size);
        assert!(court.permits(&spawn_box), "character must be able to stand at spawn");
    }
}
