// MODEL: Simulation data
pub mod ball;
pub mod camera;
pub mod character;
pub mod court;
pub mod geometry;

pub use ball::{Ball, FlightState};
pub use camera::Camera;
pub use character::{Character, Limbs, PoseMode};
pub use geometry::{Aabb, GeometryIndex, RayQuery};
