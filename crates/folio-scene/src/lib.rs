#![forbid(unsafe_code)]

//! Decorative 3D background for the hero section.
//!
//! A fixed batch of wireframe Platonic solids is scattered on a thick
//! spherical shell and slowly rotated every display frame. The crate holds
//! no rendering backend; hosts stroke the projected line buffer onto
//! whatever surface they own (a 2D canvas in the browser).

pub mod camera;
pub mod config;
pub mod geometry;
pub mod material;
pub mod math;
pub mod scene;

pub use camera::PerspectiveCamera;
pub use config::BackgroundConfig;
pub use geometry::{GeometryKind, Wireframe};
pub use material::{AmbientLight, MaterialKind, PointLight, Rgb};
pub use math::Vec3;
pub use scene::{BackgroundObject, BackgroundScene, Container, FLOATS_PER_SEGMENT};
