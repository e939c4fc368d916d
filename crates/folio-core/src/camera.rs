//! Camera used by the particle renderer and the scroll-driven camera path.
//!
//! The camera never rotates: it looks down -Z from wherever the path puts it,
//! and only its position and aspect ratio change at runtime.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Perspective camera looking down the negative Z axis.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Exponentially approach `target` with time constant [`CAMERA_EASE_TAU_SEC`].
    pub fn ease_toward(&mut self, target: Vec3, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec.max(0.0) / CAMERA_EASE_TAU_SEC).exp();
        self.eye += (target - self.eye) * alpha;
    }
}

/// Centripetal Catmull-Rom curve sampled by arc length.
///
/// Open curve: the end tangents are extrapolated from the first and last
/// segments, so `point_at(0)` and `point_at(1)` hit the end points exactly.
#[derive(Clone, Debug)]
pub struct CameraPath {
    points: Vec<Vec3>,
    arc_lengths: Vec<f32>,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self::new(CAMERA_PATH_POINTS.to_vec())
    }
}

impl CameraPath {
    pub fn new(points: Vec<Vec3>) -> Self {
        let mut path = Self {
            points,
            arc_lengths: Vec::new(),
        };
        path.arc_lengths = path.build_arc_lengths(CAMERA_PATH_ARC_DIVISIONS);
        path
    }

    /// Point at parameter `t` (uniform in segment index, not in length).
    pub fn point(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        match n {
            0 => return Vec3::ZERO,
            1 => return self.points[0],
            _ => {}
        }
        let p = (n - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= n - 1 {
            seg = n - 2;
            weight = 1.0;
        }

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };

        // Centripetal parameterisation: knot spacing = sqrt(chord length).
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        let mut out = [0.0f32; 3];
        for axis in 0..3 {
            let (x0, x1, x2, x3) = (p0[axis], p1[axis], p2[axis], p3[axis]);
            let t1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
            let t2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
            out[axis] = hermite(x1, x2, t1, t2, weight);
        }
        Vec3::from_array(out)
    }

    /// Point at fraction `u` of the total arc length.
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// Camera eye for section progress `u`: the curve point pushed back by the
    /// resting camera distance.
    pub fn camera_target(&self, u: f32) -> Vec3 {
        self.point_at(u) + Vec3::new(0.0, 0.0, CAMERA_Z)
    }

    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    fn build_arc_lengths(&self, divisions: usize) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut sum = 0.0;
        let mut last = self.point(0.0);
        lengths.push(0.0);
        for i in 1..=divisions {
            let current = self.point(i as f32 / divisions as f32);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }
        lengths
    }

    fn u_to_t(&self, u: f32) -> f32 {
        let total = self.length();
        let divisions = self.arc_lengths.len().saturating_sub(1);
        if total <= 0.0 || divisions == 0 {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * total;
        // First sample whose cumulative length reaches the target.
        let i = self
            .arc_lengths
            .partition_point(|&len| len < target)
            .clamp(1, divisions);
        let before = self.arc_lengths[i - 1];
        let segment = self.arc_lengths[i] - before;
        let fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };
        (i as f32 - 1.0 + fraction) / divisions as f32
    }
}

#[inline]
fn hermite(p0: f32, p1: f32, m0: f32, m1: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let c0 = p0;
    let c1 = m0;
    let c2 = -3.0 * p0 + 3.0 * p1 - 2.0 * m0 - m1;
    let c3 = 2.0 * p0 - 2.0 * p1 + m0 + m1;
    c0 + c1 * t + c2 * t2 + c3 * t3
}
