#![forbid(unsafe_code)]

//! Material palette and the lights that shade it.

use crate::math::Vec3;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Channels scaled to [0, 1].
    #[must_use]
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

/// Material palette for background objects. All variants render as wireframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// `#3b82f6`, roughness 0.5, metalness 0.8.
    Blue,
    /// `#60a5fa`, roughness 0.3, metalness 0.7.
    Sky,
    /// `#2563eb`, roughness 0.7, metalness 0.5.
    Deep,
}

impl MaterialKind {
    pub const ALL: [Self; 3] = [Self::Blue, Self::Sky, Self::Deep];

    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::Blue => Rgb::from_hex(0x3b82f6),
            Self::Sky => Rgb::from_hex(0x60a5fa),
            Self::Deep => Rgb::from_hex(0x2563eb),
        }
    }

    #[must_use]
    pub const fn roughness(self) -> f32 {
        match self {
            Self::Blue => 0.5,
            Self::Sky => 0.3,
            Self::Deep => 0.7,
        }
    }

    #[must_use]
    pub const fn metalness(self) -> f32 {
        match self {
            Self::Blue => 0.8,
            Self::Sky => 0.7,
            Self::Deep => 0.5,
        }
    }

    #[must_use]
    pub const fn wireframe(self) -> bool {
        true
    }
}

/// Uniform light from every direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

/// Omnidirectional light with a hard cutoff at `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
    pub distance: f32,
}

impl PointLight {
    /// Irradiance at `point` for a surface facing `normal`, per channel.
    #[must_use]
    pub fn contribution(&self, point: Vec3, normal: Vec3) -> [f32; 3] {
        let to_light = self.position - point;
        let dist = to_light.length();
        if self.distance > 0.0 && dist >= self.distance {
            return [0.0; 3];
        }
        let falloff = if self.distance > 0.0 {
            let t = 1.0 - dist / self.distance;
            t * t
        } else {
            1.0
        };
        let lambert = normal.dot(to_light.normalized()).max(0.0);
        let k = self.intensity * falloff * lambert;
        let [r, g, b] = self.color.to_unit();
        [r * k, g * k, b * k]
    }
}

/// Shade a material under the scene lights. Returns 0–255 channels.
///
/// Rougher materials take more diffuse light; metallic ones keep more of
/// their own color under ambient light.
#[must_use]
pub fn shade(
    material: MaterialKind,
    ambient: &AmbientLight,
    lights: &[PointLight],
    point: Vec3,
    normal: Vec3,
) -> [f32; 3] {
    let base = material.color().to_unit();
    let [ar, ag, ab] = ambient.color.to_unit();
    let ambient_k = ambient.intensity * (0.5 + 0.5 * material.metalness());
    let mut light = [ar * ambient_k, ag * ambient_k, ab * ambient_k];
    let diffuse_k = 0.5 + 0.5 * material.roughness();
    for pl in lights {
        let c = pl.contribution(point, normal);
        for (acc, add) in light.iter_mut().zip(c) {
            *acc += add * diffuse_k;
        }
    }
    let mut out = [0.0; 3];
    for ((o, b), l) in out.iter_mut().zip(base).zip(light) {
        *o = (b * l).clamp(0.0, 1.0) * 255.0;
    }
    out
}
