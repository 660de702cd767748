//! # morphfield - sphere-to-text particle morph intros
//!
//! A point cloud rests on a sphere, slowly spinning; after a configurable
//! delay it morphs into the silhouette of a short text string and then
//! keeps breathing in place until the user dismisses it. morphfield owns
//! the geometric and state logic (sampling, role assignment, the timed
//! eased transition, idle motion) and ships a small wgpu viewer for hosts
//! that just want the stock overlay.
//!
//! ## Quick Start
//!
//! ```ignore
//! use morphfield::Intro;
//!
//! fn main() {
//!     Intro::new()
//!         .with_text("VKR")
//!         .with_particle_count(12_000)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! ## Driving the field yourself
//!
//! The viewer is optional. [`ParticleField`] is a plain owned object: the
//! host calls [`ParticleField::tick`] on its own schedule (a frame
//! callback, a timer, a test loop with synthetic deltas) and reads the
//! buffers back for drawing:
//!
//! ```ignore
//! use morphfield::{FieldConfig, ParticleField};
//!
//! let mut field = ParticleField::new(FieldConfig::new().with_text("HI"));
//! loop {
//!     field.tick(dt);
//!     draw_points(field.positions(), field.colors(), field.rotation());
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Phase** ([`Phase`]): `Sphere` -> `Morphing` -> `Text`, one way per
//!   morph. A settled field can morph again; it never falls back to the
//!   sphere on its own.
//! - **Role** ([`Role`]): at each morph the first `min(count, silhouette)`
//!   particles become `Text` and land exactly on silhouette points; the
//!   rest become `Ambient` and cluster around the glyphs.
//! - **Settling**: when the morph's configured delay elapses, every
//!   particle's position is snapshotted as its base. Idle motion is always
//!   computed from those bases, never from live positions, so it stays
//!   bounded forever.
//!
//! All timing constants (morph duration, settle delay, auto-morph delay,
//! spin rates) live in [`FieldConfig`].

pub mod ease;
pub mod error;
pub mod field;
pub mod glyph;
pub mod sampler;
pub mod time;
pub mod window;

mod idle;
mod morph;
mod render;

pub use error::{GpuError, IntroError};
pub use field::{FieldConfig, ParticleField, Phase, Role};
pub use glam::{Vec2, Vec3};
pub use glyph::GlyphStyle;
pub use time::Time;
pub use window::Intro;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use morphfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GpuError, IntroError};
    pub use crate::field::{FieldConfig, ParticleField, Phase, Role};
    pub use crate::glyph::GlyphStyle;
    pub use crate::time::Time;
    pub use crate::window::Intro;
    pub use crate::{Vec2, Vec3};
}
