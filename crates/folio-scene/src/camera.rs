#![forbid(unsafe_code)]

//! Perspective camera on the +Z axis looking at the origin.

use crate::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z.
    pub distance: f32,
}

impl PerspectiveCamera {
    /// Project a world point to surface pixels. Points outside the
    /// near/far range are culled.
    #[must_use]
    pub fn project(&self, p: Vec3, width: f32, height: f32) -> Option<(f32, f32)> {
        let depth = self.distance - p.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let f = 1.0 / (self.fov_deg.to_radians() * 0.5).tan();
        let ndc_x = f / self.aspect * p.x / depth;
        let ndc_y = f * p.y / depth;
        Some(((ndc_x + 1.0) * 0.5 * width, (1.0 - ndc_y) * 0.5 * height))
    }

    /// Update the aspect ratio from surface dimensions. Zero height is ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera {
            fov_deg: 75.0,
            aspect: 2.0,
            near: 0.1,
            far: 1000.0,
            distance: 8.0,
        }
    }

    #[test]
    fn origin_projects_to_center() {
        let (x, y) = camera().project(Vec3::ZERO, 800.0, 400.0).unwrap();
        assert!((x - 400.0).abs() < 1e-3);
        assert!((y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn up_is_up_on_screen() {
        let (_, y) = camera().project(Vec3::new(0.0, 1.0, 0.0), 800.0, 400.0).unwrap();
        assert!(y < 200.0);
    }

    #[test]
    fn behind_camera_is_culled() {
        assert!(camera().project(Vec3::new(0.0, 0.0, 9.0), 800.0, 400.0).is_none());
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut cam = camera();
        cam.set_viewport(1200, 600);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(10, 0);
        assert_eq!(cam.aspect, 2.0);
    }
}
