use glam::Vec3;

/// Pitch rotation (radians about the local x axis) of each animated limb.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Limbs {
    pub left_arm: f32,
    pub right_arm: f32,
    pub left_leg: f32,
    pub right_leg: f32,
}

impl Limbs {
    pub fn arms(&self) -> (f32, f32) {
        (self.left_arm, self.right_arm)
    }

    pub fn set_arms(&mut self, left: f32, right: f32) {
        self.left_arm = left;
        self.right_arm = right;
    }

    pub fn set_legs(&mut self, left: f32, right: f32) {
        self.left_leg = left;
        self.right_leg = right;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseMode {
    Idle,
    Walking,
    Throwing,
}

/// The player character on the court.
#[derive(Debug, Clone)]
pub struct Character {
    pub position: Vec3,
    /// Quantized facing (multiples of the rotation step) the character is turning towards.
    pub target_facing: f32,
    /// Facing currently shown, eased towards `target_facing`.
    pub facing: f32,
    pub limbs: Limbs,
}

impl Character {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target_facing: 0.0,
            facing: 0.0,
            limbs: Limbs::default(),
        }
    }
}
