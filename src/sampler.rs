//! Sphere-surface point sampling.
//!
//! The resting configuration of a field is a Fibonacci-style spiral over a
//! sphere surface: successive indices wind around the sphere at a golden-like
//! rate, giving an even distribution without clustering at the poles. A small
//! random offset per axis breaks the crystalline regularity; it is cosmetic,
//! so it comes from a non-deterministic source.

use crate::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Point `i` of `n` on the spiral over a sphere of the given radius.
///
/// Deterministic: the same `(i, n, radius)` always yields the same point.
pub fn sphere_point(i: usize, n: usize, radius: f32) -> Vec3 {
    let phi = (-1.0 + 2.0 * i as f32 / n as f32).acos();
    let theta = (n as f32 * PI).sqrt() * phi;

    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// All `n` spiral points, each offset by up to `jitter` per axis.
pub fn sphere_points<R: Rng>(n: usize, radius: f32, jitter: f32, rng: &mut R) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            sphere_point(i, n, radius)
                + Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
                    (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
                    (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
                )
        })
        .collect()
}

/// Per-point colors: a blue-violet ramp keyed on normalized distance from
/// the origin, so jittered points shimmer slightly against their neighbors.
pub fn sphere_colors(points: &[Vec3], radius: f32) -> Vec<Vec3> {
    points
        .iter()
        .map(|p| {
            let depth = if radius > 0.0 { p.length() / radius } else { 0.0 };
            hsl_to_rgb(0.64 + depth * 0.15, 0.7, 0.45 + depth * 0.25)
        })
        .collect()
}

/// Convert HSL to RGB. Hue wraps; saturation and lightness clamp to `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in [0, 1, 100, 2048] {
            assert_eq!(sphere_points(n, 8.0, 0.25, &mut rng).len(), n);
        }
    }

    #[test]
    fn test_points_near_surface() {
        let mut rng = SmallRng::seed_from_u64(7);
        let radius = 8.0;
        let jitter = 0.25;
        // Worst case offset is jitter on all three axes at once.
        let slack = jitter * 3.0_f32.sqrt() + 1e-3;
        for p in sphere_points(5000, radius, jitter, &mut rng) {
            assert!((p.length() - radius).abs() <= slack, "stray point {p:?}");
        }
    }

    #[test]
    fn test_unjittered_point_exact() {
        let p = sphere_point(0, 100, 8.0);
        assert!((p.length() - 8.0).abs() < 1e-4);
        // i = 0 gives phi = acos(-1) = pi, the -z pole.
        assert!((p.z - (-8.0)).abs() < 1e-3);
    }

    #[test]
    fn test_colors_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let points = sphere_points(1000, 8.0, 0.25, &mut rng);
        for c in sphere_colors(&points, 8.0) {
            for ch in [c.x, c.y, c.z] {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }

    #[test]
    fn test_hsl_primaries() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red.x - 1.0).abs() < 1e-3);
        assert!(red.y < 1e-3);
        assert!(red.z < 1e-3);

        let white = hsl_to_rgb(0.3, 1.0, 1.0);
        assert!((white.min_element() - 1.0).abs() < 1e-3);
    }
}
