//! The particle field: state, phases, and the tick loop.
//!
//! A [`ParticleField`] owns every per-particle buffer as a parallel array
//! keyed by particle index (positions, roles, settled bases, colors). The
//! host owns the schedule: it calls [`ParticleField::tick`] with real or
//! synthetic frame deltas, [`ParticleField::morph_to`] to launch a
//! transition, and [`ParticleField::dispose`] on teardown. Nothing inside
//! the field schedules callbacks or reads a global clock.
//!
//! # Lifecycle
//!
//! ```ignore
//! use morphfield::{FieldConfig, ParticleField, Phase};
//!
//! let mut field = ParticleField::new(FieldConfig::new());
//! assert_eq!(field.phase(), Phase::Sphere);
//!
//! // In the host's frame loop:
//! field.tick(delta_seconds);
//! renderer.draw(field.positions(), field.colors(), field.rotation());
//! ```
//!
//! Phases walk one way per morph: `Sphere -> Morphing -> Text`. A settled
//! field can morph again (`Text -> Morphing -> Text`), but never returns to
//! the sphere on its own.

use crate::glyph::{self, GlyphStyle};
use crate::morph::{self, Morph};
use crate::{idle, sampler, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Coarse animation state of the whole field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Resting on the sphere, slowly spinning.
    Sphere,
    /// A timed transition toward a text silhouette is in flight.
    Morphing,
    /// Settled on a silhouette; idle motion only.
    Text,
}

/// Per-particle assignment, decided at each morph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Holds a silhouette point; pinned once settled.
    Text,
    /// Clusters around the silhouette and keeps drifting.
    Ambient,
}

/// Configuration for a particle field.
///
/// Every timing constant of the animation lives here rather than in the
/// code; the defaults reproduce the stock intro.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Number of particles. Fixed for the lifetime of the field.
    pub count: usize,
    /// Sphere radius of the resting configuration.
    pub radius: f32,
    /// Maximum per-axis offset applied to each sphere point.
    pub jitter: f32,
    /// Text the auto-morph transitions to.
    pub text: String,
    /// How text is rasterized and thinned into silhouette points.
    pub glyph: GlyphStyle,
    /// Planar scatter (full width) for particles beyond the silhouette.
    pub spread: f32,
    /// Depth scatter (full range) for particles beyond the silhouette.
    pub depth_spread: f32,
    /// Seconds a morph interpolates positions.
    pub morph_duration: f32,
    /// Seconds after morph start at which bases are snapshotted and the
    /// field counts as settled. Clamped to at least `morph_duration`.
    pub settle_delay: f32,
    /// Seconds the field rotation takes to unwind during a morph.
    pub rotation_ease_duration: f32,
    /// Seconds of sphere phase before the field morphs to `text` on its
    /// own. `None` leaves morphing entirely to the host.
    pub auto_morph_delay: Option<f32>,
    /// Amplitude of the ambient orbit once settled.
    pub wobble: f32,
    /// Sphere-phase spin around y, radians/sec.
    pub spin_y: f32,
    /// Sphere-phase spin around x, radians/sec.
    pub spin_x: f32,
}

impl FieldConfig {
    /// The stock intro configuration.
    pub fn new() -> Self {
        Self {
            count: 12_000,
            radius: 8.0,
            jitter: 0.25,
            text: "VKR".to_string(),
            glyph: GlyphStyle::new(),
            spread: 12.0,
            depth_spread: 8.0,
            morph_duration: 2.0,
            settle_delay: 2.1,
            rotation_ease_duration: 0.8,
            auto_morph_delay: Some(5.0),
            wobble: 0.4,
            spin_y: 0.12,
            spin_x: 0.06,
        }
    }

    /// Set the particle count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the auto-morph text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the resting sphere radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the glyph rasterization style.
    pub fn with_glyph(mut self, glyph: GlyphStyle) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set the morph duration in seconds.
    pub fn with_morph_duration(mut self, seconds: f32) -> Self {
        self.morph_duration = seconds;
        self
    }

    /// Set the settle delay in seconds.
    pub fn with_settle_delay(mut self, seconds: f32) -> Self {
        self.settle_delay = seconds;
        self
    }

    /// Set or disable the automatic morph trigger.
    pub fn with_auto_morph_delay(mut self, delay: Option<f32>) -> Self {
        self.auto_morph_delay = delay;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An animated point cloud that morphs from a sphere into text.
///
/// All buffers are parallel arrays indexed by particle id; the field never
/// allocates per particle after construction. Exactly one caller mutates the
/// field, on whatever schedule it owns.
pub struct ParticleField {
    config: FieldConfig,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    roles: Vec<Role>,
    text_bases: Vec<Vec3>,
    ambient_bases: Vec<Vec3>,
    rotation: Vec3,
    phase: Phase,
    settled: bool,
    elapsed: f32,
    morph: Option<Morph>,
    disposed: bool,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field resting on its sphere configuration.
    pub fn new(config: FieldConfig) -> Self {
        // Seeded from wall time: the jitter is cosmetic, reproducibility
        // within a run is all that matters.
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        let mut rng = SmallRng::seed_from_u64(seed);

        let positions =
            sampler::sphere_points(config.count, config.radius, config.jitter, &mut rng);
        let colors = sampler::sphere_colors(&positions, config.radius);
        let count = config.count;

        Self {
            config,
            positions,
            colors,
            roles: vec![Role::Ambient; count],
            text_bases: vec![Vec3::ZERO; count],
            ambient_bases: vec![Vec3::ZERO; count],
            rotation: Vec3::ZERO,
            phase: Phase::Sphere,
            settled: false,
            elapsed: 0.0,
            morph: None,
            disposed: false,
            rng,
        }
    }

    /// Number of particles. Fixed for the field's lifetime.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current animation phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the last morph has settled and bases are trustworthy.
    #[inline]
    pub fn settled(&self) -> bool {
        self.settled
    }

    /// Whether the field has been torn down.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Current particle positions, model space.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Static per-particle colors.
    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Per-particle roles as assigned by the last morph.
    #[inline]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Settled anchors for text particles. Valid entries only where the
    /// role is [`Role::Text`] and [`ParticleField::settled`] is true.
    #[inline]
    pub fn text_bases(&self) -> &[Vec3] {
        &self.text_bases
    }

    /// Settled anchors for ambient particles, same validity rule.
    #[inline]
    pub fn ambient_bases(&self) -> &[Vec3] {
        &self.ambient_bases
    }

    /// Field rotation as euler angles; apply as a model transform at draw.
    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Seconds of accumulated tick time.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of particles currently holding the text role.
    pub fn text_count(&self) -> usize {
        self.roles.iter().filter(|r| **r == Role::Text).count()
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Disposed fields ignore ticks entirely; no buffer is written after
    /// teardown.
    pub fn tick(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        self.elapsed += dt;

        match self.phase {
            Phase::Sphere => {
                self.rotation.y += self.config.spin_y * dt;
                self.rotation.x += self.config.spin_x * dt;

                if let Some(delay) = self.config.auto_morph_delay {
                    if self.elapsed >= delay {
                        let text = self.config.text.clone();
                        self.morph_to(&text);
                    }
                }
            }
            Phase::Morphing => self.advance_morph(dt),
            Phase::Text => {
                if self.settled {
                    self.apply_idle();
                }
            }
        }
    }

    /// Begin a transition toward the silhouette of `text`.
    ///
    /// Returns `false` without touching any state when a morph is already
    /// in flight (the running transition keeps its clock) or when the field
    /// has been disposed. A silhouette with fewer points than particles
    /// leaves the surplus clustered around the text; an empty silhouette
    /// degrades to an all-ambient cloud around the origin.
    pub fn morph_to(&mut self, text: &str) -> bool {
        if self.disposed || self.phase == Phase::Morphing {
            return false;
        }

        let silhouette = glyph::silhouette(text, &self.config.glyph, &mut self.rng);
        self.assign_roles(silhouette.len());

        let target = morph::build_targets(
            &silhouette,
            self.config.count,
            self.config.spread,
            self.config.depth_spread,
            &mut self.rng,
        );

        self.morph = Some(Morph::new(self.positions.clone(), target, self.rotation));
        self.phase = Phase::Morphing;
        self.settled = false;
        true
    }

    /// Tear the field down. Idempotent: any later call, tick, or morph is
    /// a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.morph = None;
    }

    /// Give the first `min(count, text_point_count)` particles the text
    /// role and the rest the ambient role.
    pub(crate) fn assign_roles(&mut self, text_point_count: usize) {
        let text_count = text_point_count.min(self.roles.len());
        for (i, role) in self.roles.iter_mut().enumerate() {
            *role = if i < text_count { Role::Text } else { Role::Ambient };
        }
    }

    /// Snapshot every particle's current position into the base buffer for
    /// its role. Only meaningful at the settle point of a morph.
    pub(crate) fn record_settled_bases(&mut self) {
        for i in 0..self.positions.len() {
            match self.roles[i] {
                Role::Text => self.text_bases[i] = self.positions[i],
                Role::Ambient => self.ambient_bases[i] = self.positions[i],
            }
        }
    }

    fn advance_morph(&mut self, dt: f32) {
        let Some(mut morph) = self.morph.take() else {
            return;
        };
        morph.elapsed += dt;

        let f = morph.position_fraction(self.config.morph_duration);
        for ((pos, start), target) in self
            .positions
            .iter_mut()
            .zip(&morph.start)
            .zip(&morph.target)
        {
            *pos = start.lerp(*target, f);
        }

        let rf = morph.rotation_fraction(self.config.rotation_ease_duration);
        self.rotation = morph.rotation_start.lerp(Vec3::ZERO, rf);

        let settle_at = self.config.settle_delay.max(self.config.morph_duration);
        if morph.elapsed >= settle_at {
            self.record_settled_bases();
            self.phase = Phase::Text;
            self.settled = true;
        } else {
            self.morph = Some(morph);
        }
    }

    fn apply_idle(&mut self) {
        let t = self.elapsed;
        let wobble = self.config.wobble;
        for i in 0..self.positions.len() {
            self.positions[i] = match self.roles[i] {
                Role::Text => self.text_bases[i],
                Role::Ambient => idle::ambient_position(self.ambient_bases[i], i, t, wobble),
            };
        }
    }
}
