//! In-flight transition state.
//!
//! A morph is a single timed interpolation: a snapshot of every particle's
//! position at the moment the morph began, a target buffer, and an elapsed
//! clock. Each tick evaluates one eased fraction and lerps the whole buffer,
//! which makes the transition trivial to cancel, to resume, and to step with
//! a synthetic clock.

use crate::ease;
use crate::{Vec2, Vec3};
use rand::Rng;

/// A transition from a start snapshot toward a target buffer.
pub(crate) struct Morph {
    pub start: Vec<Vec3>,
    pub target: Vec<Vec3>,
    /// Field rotation when the morph began; eased back to zero.
    pub rotation_start: Vec3,
    /// Seconds since the morph began, advanced by the owner's ticks.
    pub elapsed: f32,
}

impl Morph {
    pub fn new(start: Vec<Vec3>, target: Vec<Vec3>, rotation_start: Vec3) -> Self {
        Self {
            start,
            target,
            rotation_start,
            elapsed: 0.0,
        }
    }

    /// Eased position fraction for the current elapsed time. Holds at 1.0
    /// once the duration has passed.
    pub fn position_fraction(&self, duration: f32) -> f32 {
        if duration > 0.0 {
            ease::ease_in_out_cubic(self.elapsed / duration)
        } else {
            1.0
        }
    }

    /// Eased rotation fraction; reaches 1.0 (rotation fully unwound) on its
    /// own, shorter clock.
    pub fn rotation_fraction(&self, duration: f32) -> f32 {
        if duration > 0.0 {
            ease::ease_out_cubic(self.elapsed / duration)
        } else {
            1.0
        }
    }
}

/// Build the per-particle target buffer for a silhouette.
///
/// Particles with an index below the silhouette length land exactly on their
/// point in the z = 0 plane. The rest cycle through the silhouette with a
/// random planar spread and a random depth, so they cluster around the text
/// instead of scattering. An empty silhouette anchors everything at the
/// origin; there is nothing to cycle through.
pub(crate) fn build_targets<R: Rng>(
    silhouette: &[Vec2],
    count: usize,
    spread: f32,
    depth_spread: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            if i < silhouette.len() {
                let p = silhouette[i];
                Vec3::new(p.x, p.y, 0.0)
            } else {
                let base = if silhouette.is_empty() {
                    Vec2::ZERO
                } else {
                    silhouette[i % silhouette.len()]
                };
                Vec3::new(
                    base.x + (rng.gen::<f32>() - 0.5) * spread,
                    base.y + (rng.gen::<f32>() - 0.5) * spread,
                    (rng.gen::<f32>() - 0.5) * depth_spread,
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_targets_hit_silhouette_exactly() {
        let mut rng = SmallRng::seed_from_u64(11);
        let silhouette = vec![Vec2::new(1.0, 2.0), Vec2::new(-3.0, 0.5)];
        let targets = build_targets(&silhouette, 10, 12.0, 8.0, &mut rng);

        assert_eq!(targets.len(), 10);
        assert_eq!(targets[0], Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(targets[1], Vec3::new(-3.0, 0.5, 0.0));
    }

    #[test]
    fn test_extra_targets_cluster_near_silhouette() {
        let mut rng = SmallRng::seed_from_u64(11);
        let silhouette = vec![Vec2::new(1.0, 2.0), Vec2::new(-3.0, 0.5)];
        let spread = 12.0;
        let depth_spread = 8.0;
        let targets = build_targets(&silhouette, 100, spread, depth_spread, &mut rng);

        for (i, t) in targets.iter().enumerate().skip(silhouette.len()) {
            let base = silhouette[i % silhouette.len()];
            assert!((t.x - base.x).abs() <= spread / 2.0);
            assert!((t.y - base.y).abs() <= spread / 2.0);
            assert!(t.z.abs() <= depth_spread / 2.0);
        }
    }

    #[test]
    fn test_empty_silhouette_anchors_at_origin() {
        let mut rng = SmallRng::seed_from_u64(11);
        let targets = build_targets(&[], 50, 12.0, 8.0, &mut rng);

        assert_eq!(targets.len(), 50);
        for t in targets {
            assert!(t.x.abs() <= 6.0);
            assert!(t.y.abs() <= 6.0);
            assert!(t.z.abs() <= 4.0);
        }
    }

    #[test]
    fn test_zero_spread_is_safe() {
        let mut rng = SmallRng::seed_from_u64(11);
        let targets = build_targets(&[Vec2::ONE], 5, 0.0, 0.0, &mut rng);
        for t in targets.iter().skip(1) {
            assert_eq!(*t, Vec3::new(1.0, 1.0, 0.0));
        }
    }

    #[test]
    fn test_fractions_hold_at_one() {
        let mut morph = Morph::new(Vec::new(), Vec::new(), Vec3::ZERO);
        morph.elapsed = 99.0;
        assert_eq!(morph.position_fraction(2.0), 1.0);
        assert_eq!(morph.rotation_fraction(0.8), 1.0);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let morph = Morph::new(Vec::new(), Vec::new(), Vec3::ZERO);
        assert_eq!(morph.position_fraction(0.0), 1.0);
        assert_eq!(morph.rotation_fraction(0.0), 1.0);
    }
}
