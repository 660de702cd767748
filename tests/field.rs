//! End-to-end field behavior, driven by a synthetic clock.
//!
//! Every test steps the field with explicit `tick(dt)` deltas instead of
//! wall time, so settle timing and phase walks are exact.

use morphfield::glyph;
use morphfield::{FieldConfig, GlyphStyle, ParticleField, Phase, Role, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 100 particles, deterministic silhouette (no thinning), no auto-morph.
fn test_config() -> FieldConfig {
    FieldConfig::new()
        .with_count(100)
        .with_auto_morph_delay(None)
        .with_glyph(GlyphStyle::new().with_keep_probability(1.0))
}

#[test]
fn morph_walks_phases_and_settles_on_schedule() {
    let config = test_config();
    let mut field = ParticleField::new(config.clone());
    assert_eq!(field.phase(), Phase::Sphere);

    assert!(field.morph_to("A"));
    assert_eq!(field.phase(), Phase::Morphing);
    assert!(!field.settled());

    field.tick(1.0);
    assert_eq!(field.phase(), Phase::Morphing);
    assert!(!field.settled());

    // The 2.0 s interpolation is done, but the 2.1 s settle point is not.
    field.tick(1.0);
    assert_eq!(field.phase(), Phase::Morphing);
    assert!(!field.settled());

    field.tick(0.2);
    assert_eq!(field.phase(), Phase::Text);
    assert!(field.settled());

    // With every covered pixel kept, the silhouette length is exact.
    let mut rng = SmallRng::seed_from_u64(1);
    let silhouette_len = glyph::silhouette("A", &config.glyph, &mut rng).len();
    assert_eq!(field.text_count(), silhouette_len.min(100));
}

#[test]
fn text_particles_sit_exactly_on_their_bases() {
    let mut field = ParticleField::new(test_config());
    field.morph_to("A");
    field.tick(2.2);
    assert!(field.settled());

    // An idle tick with zero extra elapsed time must not move a text
    // particle off its recorded base, bit for bit.
    field.tick(0.0);
    for i in 0..field.len() {
        if field.roles()[i] == Role::Text {
            assert_eq!(field.positions()[i], field.text_bases()[i]);
        }
    }

    // And it stays pinned as time actually passes.
    field.tick(3.7);
    for i in 0..field.len() {
        if field.roles()[i] == Role::Text {
            assert_eq!(field.positions()[i], field.text_bases()[i]);
        }
    }
}

#[test]
fn ambient_idle_motion_stays_bounded() {
    // Enough particles that the "A" silhouette cannot absorb them all, so
    // both roles are present.
    let config = test_config().with_count(9_000);
    let wobble = config.wobble;
    let mut field = ParticleField::new(config);
    field.morph_to("A");
    field.tick(2.2);
    assert!(field.settled());
    assert!(field.text_count() > 0);
    assert!(field.text_count() < field.len());

    for _ in 0..100 {
        field.tick(0.5);
        for i in 0..field.len() {
            if field.roles()[i] == Role::Ambient {
                let base = field.ambient_bases()[i];
                let p = field.positions()[i];
                assert!(p.x.abs() <= base.x.abs() + wobble + 1e-3);
                assert!(p.y.abs() <= base.y.abs() + wobble + 1e-3);
                assert!(p.z.abs() <= base.z.abs() + 1e-3);
            }
        }
    }
}

#[test]
fn dispose_mid_morph_freezes_every_buffer() {
    let mut field = ParticleField::new(test_config());
    field.morph_to("A");
    field.tick(0.5);

    field.dispose();
    assert!(field.is_disposed());
    let frozen: Vec<Vec3> = field.positions().to_vec();

    // Ticks after teardown must not write anything.
    field.tick(1.0);
    field.tick(10.0);
    assert_eq!(field.positions(), frozen.as_slice());
    assert_eq!(field.phase(), Phase::Morphing);
    assert!(!field.settled());

    // Further requests are refused, and a second teardown is a no-op.
    assert!(!field.morph_to("B"));
    field.dispose();
    assert!(field.is_disposed());
}

#[test]
fn morph_request_during_flight_is_dropped() {
    let mut field = ParticleField::new(test_config());
    assert!(field.morph_to("A"));
    field.tick(0.5);

    // The new request is ignored; the running transition keeps its clock.
    assert!(!field.morph_to("B"));
    assert_eq!(field.phase(), Phase::Morphing);

    // Settling happens 2.1 s after the *first* request, proving no restart.
    field.tick(1.6);
    assert!(field.settled());

    // A settled field accepts a new target.
    assert!(field.morph_to("B"));
    assert_eq!(field.phase(), Phase::Morphing);
    assert!(!field.settled());
}

#[test]
fn blank_text_degrades_to_ambient_cloud() {
    let config = test_config();
    let mut field = ParticleField::new(config.clone());

    assert!(field.morph_to("   "));
    field.tick(2.2);
    assert!(field.settled());
    assert_eq!(field.text_count(), 0);
    assert!(field.roles().iter().all(|r| *r == Role::Ambient));

    // Everything anchors around the origin within the scatter ranges.
    for base in field.ambient_bases() {
        assert!(base.x.abs() <= config.spread / 2.0 + 1e-3);
        assert!(base.y.abs() <= config.spread / 2.0 + 1e-3);
        assert!(base.z.abs() <= config.depth_spread / 2.0 + 1e-3);
    }
}

#[test]
fn rotation_unwinds_to_zero_during_morph() {
    let mut field = ParticleField::new(test_config());

    // Let the sphere spin up first.
    field.tick(2.0);
    assert!(field.rotation().y > 0.0);

    field.morph_to("A");
    field.tick(2.2);
    assert!(field.settled());
    assert_eq!(field.rotation(), Vec3::ZERO);
}

#[test]
fn auto_morph_fires_from_tick() {
    let config = test_config()
        .with_auto_morph_delay(Some(5.0))
        .with_text("A");
    let mut field = ParticleField::new(config);

    field.tick(4.9);
    assert_eq!(field.phase(), Phase::Sphere);

    field.tick(0.2);
    assert_eq!(field.phase(), Phase::Morphing);

    field.tick(2.2);
    assert!(field.settled());
    assert!(field.text_count() > 0);
}
