#![forbid(unsafe_code)]

//! The rotating cluster behind the hero section.
//!
//! # Lifecycle
//!
//! 1. [`BackgroundScene::mount`] sizes the surface from its container and
//!    places `count` objects. A missing or zero-sized container skips
//!    initialization entirely.
//! 2. [`BackgroundScene::tick`] advances rotations once per display frame.
//! 3. [`BackgroundScene::resize`] follows the container without touching
//!    the object set.
//! 4. [`BackgroundScene::teardown`] releases the scene; later ticks and
//!    projections do nothing.
//!
//! Rendering is left to the host: [`BackgroundScene::project_lines`] yields a
//! flat `[x0, y0, x1, y1, r, g, b, ...]` buffer in surface pixels that a
//! canvas can stroke directly.

use std::f32::consts::{PI, TAU};

use rand::Rng;
use tracing::{debug, trace};

use crate::camera::PerspectiveCamera;
use crate::config::BackgroundConfig;
use crate::geometry::{self, GeometryKind, Wireframe};
use crate::material::{self, AmbientLight, MaterialKind, PointLight, Rgb};
use crate::math::Vec3;

/// Floats emitted per projected edge.
pub const FLOATS_PER_SEGMENT: usize = 7;

/// Pixel size of the element hosting the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub width: u32,
    pub height: u32,
}

impl Container {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One decorative mesh instance.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundObject {
    pub geometry: GeometryKind,
    pub material: MaterialKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl BackgroundObject {
    fn random(config: &BackgroundConfig, rng: &mut impl Rng) -> Self {
        let geometry = GeometryKind::ALL[rng.random_range(0..GeometryKind::ALL.len())];
        let material = MaterialKind::ALL[rng.random_range(0..MaterialKind::ALL.len())];
        let radius = config.radius_min + rng.random::<f32>() * (config.radius_max - config.radius_min);
        let theta = rng.random::<f32>() * TAU;
        let phi = rng.random::<f32>() * PI;
        let rotation = Vec3::new(
            rng.random::<f32>() * PI,
            rng.random::<f32>() * PI,
            rng.random::<f32>() * PI,
        );
        let scale = config.scale_min + rng.random::<f32>() * (config.scale_max - config.scale_min);
        Self {
            geometry,
            material,
            position: Vec3::from_spherical(radius, theta, phi),
            rotation,
            scale,
        }
    }
}

/// A mounted background.
#[derive(Debug, Clone)]
pub struct BackgroundScene {
    config: BackgroundConfig,
    objects: Vec<BackgroundObject>,
    group_rotation: Vec3,
    camera: PerspectiveCamera,
    ambient: AmbientLight,
    lights: [PointLight; 2],
    surface: Container,
    palette: [Wireframe; 4],
    frames: u64,
    released: bool,
}

impl BackgroundScene {
    /// Initialize against `container`. Returns `None` when the container is
    /// unavailable or has a zero dimension.
    pub fn mount(
        container: Option<Container>,
        config: &BackgroundConfig,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        let Some(surface) = container else {
            debug!("background container missing; skipping mount");
            return None;
        };
        if surface.is_empty() {
            debug!(
                width = surface.width,
                height = surface.height,
                "background container has no area; skipping mount"
            );
            return None;
        }
        let objects: Vec<BackgroundObject> = (0..config.count)
            .map(|_| BackgroundObject::random(config, &mut *rng))
            .collect();
        let mut camera = PerspectiveCamera {
            fov_deg: config.fov_deg,
            aspect: 1.0,
            near: config.near,
            far: config.far,
            distance: config.camera_distance,
        };
        camera.set_viewport(surface.width, surface.height);
        debug!(
            objects = objects.len(),
            width = surface.width,
            height = surface.height,
            "background mounted"
        );
        Some(Self {
            config: config.clone(),
            objects,
            group_rotation: Vec3::ZERO,
            camera,
            ambient: AmbientLight {
                color: Rgb::from_hex(0xffffff),
                intensity: 0.5,
            },
            lights: [
                PointLight {
                    color: Rgb::from_hex(0x3b82f6),
                    intensity: 1.0,
                    position: Vec3::new(5.0, 5.0, 5.0),
                    distance: 100.0,
                },
                PointLight {
                    color: Rgb::from_hex(0x2563eb),
                    intensity: 1.0,
                    position: Vec3::new(-5.0, -5.0, -5.0),
                    distance: 100.0,
                },
            ],
            surface,
            palette: geometry::palette(),
            frames: 0,
            released: false,
        })
    }

    #[must_use]
    pub fn objects(&self) -> &[BackgroundObject] {
        &self.objects
    }

    #[must_use]
    pub fn group_rotation(&self) -> Vec3 {
        self.group_rotation
    }

    #[must_use]
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    #[must_use]
    pub fn surface(&self) -> Container {
        self.surface
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Advance one display frame.
    ///
    /// Object `i` turns by `+delta` on X when `i` is odd (else `-delta`) and
    /// by `+delta` on Y unless `i` is a multiple of 3.
    pub fn tick(&mut self) {
        if self.released {
            return;
        }
        let [dx, dy] = self.config.group_delta;
        self.group_rotation.x += dx;
        self.group_rotation.y += dy;
        let delta = self.config.object_delta;
        for (i, obj) in self.objects.iter_mut().enumerate() {
            obj.rotation.x += if i % 2 == 1 { delta } else { -delta };
            obj.rotation.y += if i % 3 == 0 { -delta } else { delta };
        }
        self.frames += 1;
    }

    /// Follow a container resize. Zero-sized reports are ignored; returns
    /// whether the surface changed.
    pub fn resize(&mut self, container: Container) -> bool {
        if self.released || container.is_empty() || container == self.surface {
            return false;
        }
        trace!(
            width = container.width,
            height = container.height,
            "background resized"
        );
        self.surface = container;
        self.camera.set_viewport(container.width, container.height);
        true
    }

    /// Stop animating and release the surface.
    pub fn teardown(&mut self) {
        if !self.released {
            self.released = true;
            debug!(frames = self.frames, "background torn down");
        }
    }

    /// World-space position of a local vertex of `obj`.
    fn to_world(&self, obj: &BackgroundObject, local: Vec3) -> Vec3 {
        let in_group = (local * obj.scale).rotate_euler(obj.rotation) + obj.position;
        in_group.rotate_euler(self.group_rotation)
    }

    /// Project every wireframe edge into surface pixels.
    ///
    /// Layout: `[x0, y0, x1, y1, r, g, b]` per segment, colors 0–255.
    /// Segments with an endpoint outside the clip range are dropped.
    #[must_use]
    pub fn project_lines(&self) -> Vec<f32> {
        if self.released {
            return Vec::new();
        }
        let (w, h) = (self.surface.width as f32, self.surface.height as f32);
        let capacity: usize = self
            .objects
            .iter()
            .map(|o| self.palette[o.geometry.index()].edges.len())
            .sum();
        let mut buf = Vec::with_capacity(capacity * FLOATS_PER_SEGMENT);
        for obj in &self.objects {
            let wire = &self.palette[obj.geometry.index()];
            let world: Vec<Vec3> = wire
                .vertices
                .iter()
                .map(|v| self.to_world(obj, *v))
                .collect();
            let center = self.to_world(obj, Vec3::ZERO);
            for &(a, b) in &wire.edges {
                let (pa, pb) = (world[a], world[b]);
                let (Some((x0, y0)), Some((x1, y1))) = (
                    self.camera.project(pa, w, h),
                    self.camera.project(pb, w, h),
                ) else {
                    continue;
                };
                let mid = (pa + pb) * 0.5;
                let normal = (mid - center).normalized();
                let [r, g, bl] = material::shade(obj.material, &self.ambient, &self.lights, mid, normal);
                buf.extend_from_slice(&[x0, y0, x1, y1, r, g, bl]);
            }
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn mounted(seed: u64) -> BackgroundScene {
        let mut rng = SmallRng::seed_from_u64(seed);
        BackgroundScene::mount(
            Some(Container::new(1280, 600)),
            &BackgroundConfig::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn mount_places_configured_count_in_band() {
        let scene = mounted(7);
        assert_eq!(scene.objects().len(), 8);
        for obj in scene.objects() {
            let r = obj.position.length();
            assert!((3.0 - 1e-4..6.0 + 1e-4).contains(&r), "radius {r}");
            assert!((0.3..=0.8).contains(&obj.scale));
            for angle in [obj.rotation.x, obj.rotation.y, obj.rotation.z] {
                assert!((0.0..=PI).contains(&angle));
            }
        }
        assert!((scene.camera().aspect - 1280.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn missing_or_empty_container_skips_mount() {
        let mut rng = SmallRng::seed_from_u64(1);
        let cfg = BackgroundConfig::default();
        assert!(BackgroundScene::mount(None, &cfg, &mut rng).is_none());
        assert!(BackgroundScene::mount(Some(Container::new(0, 400)), &cfg, &mut rng).is_none());
        assert!(BackgroundScene::mount(Some(Container::new(400, 0)), &cfg, &mut rng).is_none());
    }

    #[test]
    fn tick_follows_parity_rules() {
        let mut scene = mounted(3);
        let before: Vec<Vec3> = scene.objects().iter().map(|o| o.rotation).collect();
        scene.tick();
        assert!((scene.group_rotation().x - 0.002).abs() < 1e-7);
        assert!((scene.group_rotation().y - 0.003).abs() < 1e-7);
        for (i, (obj, old)) in scene.objects().iter().zip(&before).enumerate() {
            let dx = obj.rotation.x - old.x;
            let dy = obj.rotation.y - old.y;
            let want_x = if i % 2 == 1 { 0.01 } else { -0.01 };
            let want_y = if i % 3 == 0 { -0.01 } else { 0.01 };
            assert!((dx - want_x).abs() < 1e-5, "object {i} x");
            assert!((dy - want_y).abs() < 1e-5, "object {i} y");
            assert_eq!(obj.rotation.z, old.z);
        }
    }

    #[test]
    fn resize_keeps_objects() {
        let mut scene = mounted(11);
        let objects = scene.objects().to_vec();
        assert!(scene.resize(Container::new(640, 480)));
        assert_eq!(scene.surface(), Container::new(640, 480));
        assert!((scene.camera().aspect - 640.0 / 480.0).abs() < 1e-6);
        assert_eq!(scene.objects(), objects.as_slice());
        assert!(!scene.resize(Container::new(0, 480)));
        assert_eq!(scene.surface(), Container::new(640, 480));
    }

    #[test]
    fn projection_emits_finite_colored_segments() {
        let scene = mounted(5);
        let buf = scene.project_lines();
        assert!(!buf.is_empty());
        assert_eq!(buf.len() % FLOATS_PER_SEGMENT, 0);
        for seg in buf.chunks_exact(FLOATS_PER_SEGMENT) {
            assert!(seg.iter().all(|v| v.is_finite()));
            assert!(seg[4..].iter().all(|c| (0.0..=255.0).contains(c)));
        }
    }

    #[test]
    fn teardown_stops_ticks_and_output() {
        let mut scene = mounted(9);
        scene.tick();
        scene.teardown();
        let rotation = scene.group_rotation();
        scene.tick();
        assert_eq!(scene.group_rotation(), rotation);
        assert_eq!(scene.frames(), 1);
        assert!(scene.project_lines().is_empty());
        assert!(!scene.resize(Container::new(10, 10)));
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(mounted(42).objects(), mounted(42).objects());
    }
}
