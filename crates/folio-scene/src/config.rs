#![forbid(unsafe_code)]

//! Background scene parameters.

/// Tunables for [`BackgroundScene`](crate::BackgroundScene).
///
/// The defaults reproduce the site's hero background: eight objects on a
/// shell between radius 3 and 6, seen from z = 8 through a 75° lens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct BackgroundConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub fov_deg: f32,
    pub camera_distance: f32,
    pub near: f32,
    pub far: f32,
    /// Per-frame group rotation around X and Y, in radians.
    pub group_delta: [f32; 2],
    /// Per-frame magnitude of each object's own rotation, in radians.
    pub object_delta: f32,
    /// Fixed RNG seed; `None` lets the host pick one per mount.
    pub seed: Option<u64>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            count: 8,
            radius_min: 3.0,
            radius_max: 6.0,
            scale_min: 0.3,
            scale_max: 0.8,
            fov_deg: 75.0,
            camera_distance: 8.0,
            near: 0.1,
            far: 1000.0,
            group_delta: [0.002, 0.003],
            object_delta: 0.01,
            seed: None,
        }
    }
}

impl BackgroundConfig {
    /// Check parameter ranges. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.count == 0 {
            errors.push("background.count must be > 0".into());
        }
        if !(self.radius_min > 0.0 && self.radius_min < self.radius_max) {
            errors.push(format!(
                "background.radius_min must be in (0, radius_max), got {}..{}",
                self.radius_min, self.radius_max
            ));
        }
        if !(self.scale_min > 0.0 && self.scale_min <= self.scale_max) {
            errors.push(format!(
                "background.scale_min must be in (0, scale_max], got {}..{}",
                self.scale_min, self.scale_max
            ));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            errors.push(format!(
                "background.fov_deg must be in (0, 180), got {}",
                self.fov_deg
            ));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            errors.push(format!(
                "background.near must be in (0, far), got {}..{}",
                self.near, self.far
            ));
        }
        if self.camera_distance <= self.radius_max + self.scale_max {
            errors.push(format!(
                "background.camera_distance must clear the object shell, got {}",
                self.camera_distance
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(BackgroundConfig::default().validate().is_empty());
    }

    #[test]
    fn inverted_band_and_zero_count_rejected() {
        let cfg = BackgroundConfig {
            count: 0,
            radius_min: 6.0,
            radius_max: 3.0,
            ..BackgroundConfig::default()
        };
        let errors = cfg.validate();
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors[0].contains("count"));
        assert!(errors[1].contains("radius_min"));
    }
}
