//! Analytical mannequin colliders.
//!
//! A vertical torso cylinder plus shoulder and chest spheres, derived once
//! from body measurements.
//!
//! These shapes are not consumed by the solver: cloth particles respond
//! only to gravity, wind, and their own constraints. The colliders exist as
//! a geometric reference that rotates with the mannequin, and
//! [`ColliderSet::min_clearance`] reports how close the cloth comes to them.

use std::f32::consts::TAU;

use drape_body::BodyMeasurements;
use drape_math::{rotate_y, Vec3};
use drape_types::constants::REFERENCE_HEIGHT_CM;
use serde::{Deserialize, Serialize};

use crate::state::ParticleState;

/// Collider geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColliderShape {
    Sphere { radius: f32 },
    /// Vertical (Y-aligned) capped cylinder.
    Cylinder { radius: f32, height: f32 },
}

/// What a collider stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColliderRole {
    Torso,
    ShoulderLeft,
    ShoulderRight,
    Chest,
}

/// A static collision shape placed in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub role: ColliderRole,
    pub shape: ColliderShape,
    pub center: Vec3,
}

impl Collider {
    pub fn sphere(role: ColliderRole, center: Vec3, radius: f32) -> Self {
        Self {
            role,
            shape: ColliderShape::Sphere { radius },
            center,
        }
    }

    pub fn cylinder(role: ColliderRole, center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            role,
            shape: ColliderShape::Cylinder { radius, height },
            center,
        }
    }

    /// Signed distance from `p` to the surface (negative inside).
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        let d = p - self.center;
        match self.shape {
            ColliderShape::Sphere { radius } => d.length() - radius,
            ColliderShape::Cylinder { radius, height } => {
                let radial = (d.x * d.x + d.z * d.z).sqrt() - radius;
                let vertical = d.y.abs() - height / 2.0;
                let outside = Vec3::new(radial.max(0.0), vertical.max(0.0), 0.0).length();
                outside + radial.max(vertical).min(0.0)
            }
        }
    }

    /// Rotates the collider's center about the world Y axis.
    pub fn rotate(&mut self, angle: f32) {
        self.center = rotate_y(self.center, angle);
    }
}

/// Layout for a 170 cm body, in meters, before height scaling.
const TORSO_CENTER_Y: f32 = 1.22;
const TORSO_HEIGHT_FRAC: f32 = 0.35;
const SHOULDER_Y: f32 = 1.40;
const SHOULDER_RADIUS: f32 = 0.06;
const CHEST_Y: f32 = 1.26;
const CHEST_FORWARD: f32 = 0.04;
const CHEST_RADIUS_FRAC: f32 = 0.6;

/// Builds the torso cylinder, two shoulder spheres, and the chest sphere.
///
/// The torso radius comes from the bust circumference and the shoulder
/// offset from the shoulder width; then the whole layout is scaled by
/// `height_cm / 170`.
pub fn create_mannequin_colliders(measurements: &BodyMeasurements) -> Vec<Collider> {
    let scale = measurements.height_cm / REFERENCE_HEIGHT_CM;
    let reference_height_m = REFERENCE_HEIGHT_CM / 100.0;
    let torso_radius = measurements.bust_cm / TAU / 100.0;
    let half_shoulder = measurements.shoulder_width_cm / 200.0;

    let colliders = vec![
        Collider::cylinder(
            ColliderRole::Torso,
            Vec3::new(0.0, TORSO_CENTER_Y, 0.0),
            torso_radius,
            TORSO_HEIGHT_FRAC * reference_height_m,
        ),
        Collider::sphere(
            ColliderRole::ShoulderLeft,
            Vec3::new(half_shoulder, SHOULDER_Y, 0.0),
            SHOULDER_RADIUS,
        ),
        Collider::sphere(
            ColliderRole::ShoulderRight,
            Vec3::new(-half_shoulder, SHOULDER_Y, 0.0),
            SHOULDER_RADIUS,
        ),
        Collider::sphere(
            ColliderRole::Chest,
            Vec3::new(0.0, CHEST_Y, CHEST_FORWARD),
            torso_radius * CHEST_RADIUS_FRAC,
        ),
    ];
    colliders.into_iter().map(|c| scaled(c, scale)).collect()
}

fn scaled(mut c: Collider, s: f32) -> Collider {
    c.center *= s;
    c.shape = match c.shape {
        ColliderShape::Sphere { radius } => ColliderShape::Sphere { radius: radius * s },
        ColliderShape::Cylinder { radius, height } => ColliderShape::Cylinder {
            radius: radius * s,
            height: height * s,
        },
    };
    c
}

/// The mannequin's colliders, rotated together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColliderSet {
    pub colliders: Vec<Collider>,
}

impl ColliderSet {
    pub fn new(colliders: Vec<Collider>) -> Self {
        Self { colliders }
    }

    pub fn from_measurements(measurements: &BodyMeasurements) -> Self {
        Self::new(create_mannequin_colliders(measurements))
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn rotate(&mut self, angle: f32) {
        for c in &mut self.colliders {
            c.rotate(angle);
        }
    }

    /// Smallest signed distance from `p` to any collider.
    pub fn signed_distance(&self, p: Vec3) -> Option<f32> {
        self.colliders
            .iter()
            .map(|c| c.signed_distance(p))
            .min_by(f32::total_cmp)
    }

    /// Smallest signed distance from any free particle to any collider.
    pub fn min_clearance(&self, state: &ParticleState) -> Option<f32> {
        (0..state.count)
            .filter(|&i| !state.is_pinned(i))
            .filter_map(|i| self.signed_distance(state.position(i)))
            .min_by(f32::total_cmp)
    }
}
