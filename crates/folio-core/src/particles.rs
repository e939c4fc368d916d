use crate::constants::*;
use crate::viewport::ViewportState;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

/// Number of particles for a viewport: one per 2500 px², clamped to [600, 1400].
pub fn particle_count(width: f32, height: f32) -> usize {
    let per_area = (width * height / PARTICLE_AREA_PER_POINT).floor();
    // `as` saturates: NaN and negatives become 0 and fall to the lower clamp.
    (per_area as usize).clamp(PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX)
}

/// A static point cloud with an accumulating rotation.
///
/// Positions are sampled once at construction and never resampled, not even
/// on resize. The rotation angles grow without bound; the model matrix is
/// periodic in them so no normalisation is needed.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    rotation: Vec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                    rng.gen_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                    rng.gen_range(-PARTICLE_EXTENT..PARTICLE_EXTENT),
                )
            })
            .collect();
        Self {
            positions,
            rotation: Vec2::ZERO,
        }
    }

    pub fn for_viewport<R: Rng + ?Sized>(viewport: &ViewportState, rng: &mut R) -> Self {
        Self::new(particle_count(viewport.width(), viewport.height()), rng)
    }

    /// Advance one animation frame using the current pointer offset.
    pub fn advance(&mut self, pointer_offset: Vec2) {
        self.rotation.x += ROTATION_STEP_X + pointer_offset.y * POINTER_ROTATION_GAIN;
        self.rotation.y += ROTATION_STEP_Y + pointer_offset.x * POINTER_ROTATION_GAIN;
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Object-to-world transform, X then Y intrinsic rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}
