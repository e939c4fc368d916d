// Host-side tests for the camera and its scroll-driven path.

use folio_core::*;
use glam::{Vec3, Vec4};

#[test]
fn camera_starts_on_axis() {
    let cam = Camera::new(16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn origin_projects_inside_clip_volume() {
    let cam = Camera::new(1.5);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn resize_updates_aspect() {
    let mut cam = Camera::new(1.0);
    cam.resize(1920.0, 1080.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.resize(300.0, 0.0);
    assert!(cam.aspect.is_finite());
}

#[test]
fn ease_toward_uses_time_constant() {
    let target = Vec3::new(10.0, 0.0, 5.0);
    let mut cam = Camera::new(1.0);
    cam.ease_toward(target, 0.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));

    cam.ease_toward(target, CAMERA_EASE_TAU_SEC);
    let expected = 10.0 * (1.0 - (-1.0f32).exp());
    assert!((cam.eye.x - expected).abs() < 1e-4);

    cam.ease_toward(target, 30.0);
    assert!(cam.eye.abs_diff_eq(target, 1e-4));
}

#[test]
fn path_ends_hit_control_points() {
    let path = CameraPath::default();
    assert!(path.point_at(0.0).abs_diff_eq(Vec3::new(-5.0, 0.0, 0.0), 1e-4));
    assert!(path.point_at(1.0).abs_diff_eq(Vec3::new(-5.0, 0.0, 0.0), 1e-4));
    assert!(path
        .camera_target(0.0)
        .abs_diff_eq(Vec3::new(-5.0, 0.0, 5.0), 1e-4));
}

#[test]
fn path_midpoint_by_length_is_the_far_point() {
    // The loop is symmetric, so half its length lands on (5, 0, 0).
    let path = CameraPath::default();
    assert!(path.point_at(0.5).abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 0.1));
}

#[test]
fn path_is_sampled_by_arc_length() {
    let path = CameraPath::default();
    let steps = 10;
    let fine = 50;
    let expected = path.length() / steps as f32;
    for i in 0..steps {
        // polyline length of one tenth of the parameter range
        let start = i as f32 / steps as f32;
        let piece: f32 = (0..fine)
            .map(|j| {
                let a = start + j as f32 / (steps * fine) as f32;
                let b = start + (j + 1) as f32 / (steps * fine) as f32;
                path.point_at(a).distance(path.point_at(b))
            })
            .sum();
        assert!(
            (piece - expected).abs() < expected * 0.05,
            "{} vs {}",
            piece,
            expected
        );
    }
}

#[test]
fn path_is_at_least_as_long_as_its_chords() {
    let path = CameraPath::default();
    let chords: f32 = CAMERA_PATH_POINTS
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .sum();
    assert!(path.length() >= chords - 1e-3);
}

#[test]
fn path_clamps_progress() {
    let path = CameraPath::default();
    assert_eq!(path.point_at(-1.0), path.point_at(0.0));
    assert_eq!(path.point_at(2.0), path.point_at(1.0));
}

#[test]
fn degenerate_paths() {
    assert_eq!(CameraPath::new(vec![]).point_at(0.5), Vec3::ZERO);
    let single = CameraPath::new(vec![Vec3::ONE]);
    assert_eq!(single.point_at(0.7), Vec3::ONE);
    assert_eq!(single.length(), 0.0);
}
