// Host-side tests for the particle field and viewport state.

use folio_core::*;
use glam::{Mat4, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn particle_count_scales_with_area_and_clamps() {
    // 1280x720 / 2500 = 368 -> lower clamp
    assert_eq!(particle_count(1280.0, 720.0), 600);
    // 1920x1080 / 2500 = 829.44
    assert_eq!(particle_count(1920.0, 1080.0), 829);
    assert_eq!(particle_count(4000.0, 3000.0), 1400);
}

#[test]
fn particle_count_degenerate_viewports_use_minimum() {
    assert_eq!(particle_count(0.0, 0.0), PARTICLE_COUNT_MIN);
    assert_eq!(particle_count(-100.0, 500.0), PARTICLE_COUNT_MIN);
    assert_eq!(particle_count(f32::NAN, 500.0), PARTICLE_COUNT_MIN);
}

#[test]
fn field_positions_stay_inside_extent() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(1000, &mut rng);
    assert_eq!(field.len(), 1000);
    for p in field.positions() {
        assert!(p.abs().max_element() <= PARTICLE_EXTENT, "{:?}", p);
    }
}

#[test]
fn field_is_deterministic_for_a_seed() {
    let a = ParticleField::new(50, &mut StdRng::seed_from_u64(42));
    let b = ParticleField::new(50, &mut StdRng::seed_from_u64(42));
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn field_for_viewport_uses_area_count() {
    let viewport = ViewportState::new(1920.0, 1080.0);
    let field = ParticleField::for_viewport(&viewport, &mut StdRng::seed_from_u64(1));
    assert_eq!(field.len(), 829);
}

#[test]
fn advance_adds_base_step_without_pointer() {
    let mut field = ParticleField::new(10, &mut StdRng::seed_from_u64(3));
    for _ in 0..100 {
        field.advance(Vec2::ZERO);
    }
    let r = field.rotation();
    assert!((r.x - 100.0 * ROTATION_STEP_X).abs() < 1e-4);
    assert!((r.y - 100.0 * ROTATION_STEP_Y).abs() < 1e-4);
}

#[test]
fn pointer_offset_crosses_axes() {
    let mut field = ParticleField::new(10, &mut StdRng::seed_from_u64(3));
    field.advance(Vec2::new(0.1, 0.2));
    let r = field.rotation();
    // x rotation follows vertical pointer offset, y follows horizontal
    assert!((r.x - (0.001 + 0.2 * 0.5)).abs() < 1e-6);
    assert!((r.y - (0.002 + 0.1 * 0.5)).abs() < 1e-6);
}

#[test]
fn advance_never_resamples_positions() {
    let mut field = ParticleField::new(64, &mut StdRng::seed_from_u64(9));
    let before = field.positions().to_vec();
    for _ in 0..10 {
        field.advance(Vec2::new(0.3, -0.3));
    }
    assert_eq!(before.as_slice(), field.positions());
}

#[test]
fn model_matrix_starts_at_identity() {
    let field = ParticleField::new(1, &mut StdRng::seed_from_u64(0));
    assert!(field.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn pointer_offset_is_zero_at_centre() {
    let mut v = ViewportState::new(1280.0, 720.0);
    v.pointer_moved(640.0, 360.0);
    assert_eq!(v.pointer_offset, Vec2::ZERO);

    v.pointer_moved(1280.0, 720.0);
    assert!(v.pointer_offset.abs_diff_eq(Vec2::new(0.64, 0.36), 1e-6));
}

#[test]
fn resize_keeps_pointer_offset_until_next_move() {
    let mut v = ViewportState::new(1280.0, 720.0);
    v.pointer_moved(0.0, 0.0);
    let offset = v.pointer_offset;
    v.resize(800.0, 600.0);
    assert_eq!(v.pointer_offset, offset);
    assert_eq!(v.width(), 800.0);
    assert_eq!(v.height(), 600.0);
    assert_eq!(v.area(), 480_000.0);
}

#[test]
fn midpoint_is_scroll_plus_half_height() {
    let v = ViewportState::new(1024.0, 800.0);
    assert_eq!(v.midpoint(0.0), 400.0);
    assert_eq!(v.midpoint(1200.0), 1600.0);
    assert!((v.aspect() - 1.28).abs() < 1e-6);
}
