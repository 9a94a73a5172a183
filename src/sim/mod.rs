//! Simulation module
//!
//! Everything that moves lives here. It is deterministic given a seed:
//! - Per-frame steps only (no wall-clock time)
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - Drawing goes through the `Surface` trait, no platform dependencies

pub mod circle;
pub mod collision;
pub mod color;
pub mod scene;
pub mod spawn;

pub use circle::{Circle, Reflection};
pub use collision::{CollisionPolicy, circles_overlap, resolve_collisions};
pub use color::Color;
pub use scene::{FrameStats, Scene};
pub use spawn::generate_circles;
