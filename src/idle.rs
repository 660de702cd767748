//! Resting-state motion.
//!
//! Once a morph has settled, text particles hold their base position so the
//! silhouette stays crisp, while ambient particles breathe and orbit around
//! theirs. Offsets are always computed from the settled base, never from the
//! live position, so the motion is bounded for all time instead of
//! accumulating drift.

use crate::Vec3;

/// Collective breathing rate for the x/y scale modulation, in radians/sec.
const BREATHE_XY: f32 = 0.08;
/// Breathing rate for the z axis; half speed reads as depth shimmer.
const BREATHE_Z: f32 = 0.04;
/// Per-particle orbit rate, in radians/sec.
const ORBIT_RATE: f32 = 0.6;
/// Phase offset between neighboring particle indices, in radians.
const ORBIT_STRIDE: f32 = 0.15;

/// Position of an ambient particle at absolute time `t`.
///
/// `|result.x| <= |base.x| + wobble` (likewise for y; z is bounded by
/// `|base.z|`), so the cloud can never wander away from the silhouette.
pub(crate) fn ambient_position(base: Vec3, index: usize, t: f32, wobble: f32) -> Vec3 {
    let angle = ORBIT_RATE * t + ORBIT_STRIDE * index as f32;

    Vec3::new(
        base.x * (BREATHE_XY * t).cos() + angle.sin() * wobble,
        base.y * (BREATHE_XY * t).cos() + angle.cos() * wobble,
        base.z * (BREATHE_Z * t).cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_bounded_forever() {
        let base = Vec3::new(5.0, -3.0, 2.0);
        let wobble = 0.4;
        for step in 0..20_000 {
            let t = step as f32 * 0.05;
            let p = ambient_position(base, 17, t, wobble);
            assert!(p.x.abs() <= base.x.abs() + wobble + 1e-4);
            assert!(p.y.abs() <= base.y.abs() + wobble + 1e-4);
            assert!(p.z.abs() <= base.z.abs() + 1e-4);
        }
    }

    #[test]
    fn test_ambient_at_time_zero() {
        let base = Vec3::new(1.0, 2.0, 3.0);
        let p = ambient_position(base, 0, 0.0, 0.4);
        // cos(0) = 1, sin(0) = 0: x starts at base.x, y gets the full wobble.
        assert!((p.x - base.x).abs() < 1e-6);
        assert!((p.y - (base.y + 0.4)).abs() < 1e-6);
        assert!((p.z - base.z).abs() < 1e-6);
    }

    #[test]
    fn test_neighbors_dephased() {
        let base = Vec3::ONE;
        let a = ambient_position(base, 0, 1.0, 0.4);
        let b = ambient_position(base, 1, 1.0, 0.4);
        assert!(a != b);
    }
}
