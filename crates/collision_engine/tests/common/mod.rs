//! Test shapes implementing the support-function capability

#![allow(dead_code)]

use collision_engine::prelude::*;

/// Sphere with center and radius
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl SupportMap for Sphere {
    fn support(&self, direction: &Vec3) -> Vec3 {
        match direction.try_normalize(0.0) {
            Some(unit) => self.center + unit * self.radius,
            None => self.center,
        }
    }
}

/// Axis-aligned box with center and half extents
#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Cuboid {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self { center, half_extents }
    }

    pub fn unit(center: Vec3) -> Self {
        Self::new(center, Vec3::new(0.5, 0.5, 0.5))
    }
}

impl SupportMap for Cuboid {
    fn support(&self, direction: &Vec3) -> Vec3 {
        let pick = |d: f32, h: f32| if d >= 0.0 { h } else { -h };
        self.center
            + Vec3::new(
                pick(direction.x, self.half_extents.x),
                pick(direction.y, self.half_extents.y),
                pick(direction.z, self.half_extents.z),
            )
    }
}

pub fn init_logging() {
    collision_engine::foundation::logging::init_for_tests();
}
