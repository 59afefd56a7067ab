use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::input::{Direction, InputState};
use crate::config::SimConfig;
use crate::model::{Aabb, Character, GeometryIndex};

/// Moves the character from held direction keys, one collision check per direction.
pub struct MovementSystem {
    pub speed: f32,
    pub body_size: Vec3,
}

impl MovementSystem {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            speed: config.move_speed,
            body_size: config.character_size,
        }
    }

    /// Horizontal step for one held direction at the given facing.
    pub fn displacement(&self, direction: Direction, facing: f32) -> Vec3 {
        let s = self.speed;
        let (dx, dz) = match direction {
            Direction::Forward => (facing.sin() * s, facing.cos() * s),
            Direction::Backward => (-facing.sin() * s, -facing.cos() * s),
            Direction::StrafeLeft => (-(facing - FRAC_PI_2).sin() * s, -(facing - FRAC_PI_2).cos() * s),
            Direction::StrafeRight => (-(facing + FRAC_PI_2).sin() * s, -(facing + FRAC_PI_2).cos() * s),
        };
        Vec3::new(dx, 0.0, dz)
    }

    /// Whether the character box may sit at `origin + delta`. Without loaded
    /// geometry every move is allowed.
    pub fn can_move(&self, origin: Vec3, delta: Vec3, geometry: Option<&GeometryIndex>) -> bool {
        let Some(geometry) = geometry else {
            return true;
        };
        let candidate = Aabb::from_center_size(origin + delta, self.body_size);
        geometry.permits(&candidate)
    }

    /// Apply every held direction that passes its own check. Each check starts
    /// from the position at the beginning of the tick, so the summed diagonal
    /// is not validated as a whole.
    ///
    /// Returns true if any direction was applied.
    pub fn update(
        &self,
        character: &mut Character,
        input: &InputState,
        geometry: Option<&GeometryIndex>,
    ) -> bool {
        let origin = character.position;
        let mut applied = Vec3::ZERO;
        let mut moved = false;

        for direction in Direction::ALL {
            if !input.is_held(direction) {
                continue;
            }
            let delta = self.displacement(direction, character.facing);
            if self.can_move(origin, delta, geometry) {
                applied += delta;
                moved = true;
            } else {
                tracing::debug!(?direction, pos = ?origin, "move blocked");
            }
        }

        character.position += applied;
        moved
    }
}
