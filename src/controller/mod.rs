// CONTROLLER: Input, per-tick systems and the update loop
pub mod camera_rig;
pub mod frame_loop;
pub mod input;
pub mod movement;
pub mod orientation;
pub mod pose;
pub mod projectile;
pub mod tween;

pub use camera_rig::{CameraMode, CameraRig};
pub use frame_loop::{CameraUniform, FrameSnapshot, Simulation};
pub use input::{Command, Direction, InputEvent, InputState, KeyBindings, MouseButton};
pub use movement::MovementSystem;
pub use orientation::OrientationController;
pub use pose::PoseAnimator;
pub use projectile::ProjectileSimulator;
pub use tween::{Easing, Progress, Tween};
