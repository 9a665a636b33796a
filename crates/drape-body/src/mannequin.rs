//! Mannequin query interface and reference implementations.
//!
//! The renderer owns the real mannequin; the fitting core only asks it for
//! its world bounds and, when available, live landmark positions.

use std::collections::BTreeMap;

use drape_math::{Aabb, Vec3};
use drape_mesh::MorphTargets;
use serde::{Deserialize, Serialize};

use crate::measurements::{BodyMeasurements, MeasurementKey};

/// Named body landmarks a mannequin may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Neck,
    ShoulderLeft,
    ShoulderRight,
    Chest,
    Waist,
    Hips,
}

impl Landmark {
    pub fn name(&self) -> &'static str {
        match self {
            Landmark::Neck => "neck",
            Landmark::ShoulderLeft => "shoulder_l",
            Landmark::ShoulderRight => "shoulder_r",
            Landmark::Chest => "chest",
            Landmark::Waist => "waist",
            Landmark::Hips => "hips",
        }
    }

    /// Parses a landmark name as used by rigged mannequin assets.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "neck" => Some(Landmark::Neck),
            "shoulder_l" | "shoulder_left" => Some(Landmark::ShoulderLeft),
            "shoulder_r" | "shoulder_right" => Some(Landmark::ShoulderRight),
            "chest" => Some(Landmark::Chest),
            "waist" => Some(Landmark::Waist),
            "hips" | "hip" => Some(Landmark::Hips),
            _ => None,
        }
    }

    /// Standing height of the landmark as a fraction of body height.
    pub fn height_frac(&self) -> f32 {
        match self {
            Landmark::Neck => 0.87,
            Landmark::ShoulderLeft | Landmark::ShoulderRight => 0.82,
            Landmark::Chest => 0.72,
            Landmark::Waist => 0.62,
            Landmark::Hips => 0.53,
        }
    }
}

/// What the fitting core needs from a mannequin.
pub trait MannequinQuery {
    /// World-space bounding box of the mannequin.
    fn world_bounds(&self) -> Aabb;

    /// Live world position of a landmark, if the mannequin can provide one.
    fn landmark_world_position(&self, landmark: Landmark) -> Option<Vec3>;
}

/// A mannequin described by plain data: bounds plus a landmark map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticMannequin {
    pub bounds: Aabb,
    pub landmarks: BTreeMap<Landmark, Vec3>,
}

impl StaticMannequin {
    /// Creates a mannequin with the given bounds and no landmarks.
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            landmarks: BTreeMap::new(),
        }
    }

    /// Adds a landmark (builder style).
    pub fn with_landmark(mut self, landmark: Landmark, position: Vec3) -> Self {
        self.landmarks.insert(landmark, position);
        self
    }
}

impl MannequinQuery for StaticMannequin {
    fn world_bounds(&self) -> Aabb {
        self.bounds
    }

    fn landmark_world_position(&self, landmark: Landmark) -> Option<Vec3> {
        self.landmarks.get(&landmark).copied()
    }
}

/// One measurement-driven shape key of the parametric mannequin.
struct MorphRule {
    name: &'static str,
    key: MeasurementKey,
    baseline_cm: f32,
    /// Deviation (cm) that drives the key to full influence. Negative spans
    /// drive "smaller than baseline" keys.
    span_cm: f32,
}

const MORPH_RULES: [MorphRule; 8] = [
    MorphRule { name: "bust_large", key: MeasurementKey::Bust, baseline_cm: 90.0, span_cm: 20.0 },
    MorphRule { name: "bust_small", key: MeasurementKey::Bust, baseline_cm: 90.0, span_cm: -15.0 },
    MorphRule { name: "waist_wide", key: MeasurementKey::Waist, baseline_cm: 70.0, span_cm: 25.0 },
    MorphRule { name: "waist_narrow", key: MeasurementKey::Waist, baseline_cm: 70.0, span_cm: -12.0 },
    MorphRule { name: "hips_wide", key: MeasurementKey::Hips, baseline_cm: 95.0, span_cm: 20.0 },
    MorphRule { name: "hips_narrow", key: MeasurementKey::Hips, baseline_cm: 95.0, span_cm: -15.0 },
    MorphRule { name: "shoulders_broad", key: MeasurementKey::ShoulderWidth, baseline_cm: 40.0, span_cm: 8.0 },
    MorphRule { name: "shoulders_narrow", key: MeasurementKey::ShoulderWidth, baseline_cm: 40.0, span_cm: -6.0 },
];

/// Reference mannequin built directly from measurements, in meters.
///
/// Stands on `origin` (feet), faces +Z, and is centered on X/Z.
#[derive(Debug, Clone, Copy)]
pub struct ParametricMannequin {
    pub measurements: BodyMeasurements,
    pub origin: Vec3,
}

impl ParametricMannequin {
    /// Creates a mannequin standing at the world origin.
    pub fn new(measurements: BodyMeasurements) -> Self {
        Self {
            measurements,
            origin: Vec3::ZERO,
        }
    }

    /// Body height in meters.
    pub fn height_m(&self) -> f32 {
        self.measurements.height_cm / 100.0
    }

    /// Shape-key influences that reproduce the measurements on a
    /// parametric body, clamped to `[0, 1]`.
    pub fn morph_influences(&self) -> MorphTargets {
        let mut targets = MorphTargets::from_names(MORPH_RULES.iter().map(|r| r.name));
        for rule in &MORPH_RULES {
            let delta = self.measurements.measurement(rule.key) - rule.baseline_cm;
            let w = if delta.is_finite() { (delta / rule.span_cm).clamp(0.0, 1.0) } else { 0.0 };
            targets.set_influence(rule.name, w);
        }
        targets
    }
}

impl MannequinQuery for ParametricMannequin {
    fn world_bounds(&self) -> Aabb {
        let m = &self.measurements;
        let half_width = (m.shoulder_width_cm / 2.0)
            .max(m.hips_cm / std::f32::consts::TAU)
            / 100.0;
        let half_depth = (m.bust_cm.max(m.hips_cm) / std::f32::consts::TAU) / 100.0;
        Aabb::new(
            self.origin + Vec3::new(-half_width, 0.0, -half_depth),
            self.origin + Vec3::new(half_width, self.height_m(), half_depth),
        )
    }

    fn landmark_world_position(&self, landmark: Landmark) -> Option<Vec3> {
        let y = self.height_m() * landmark.height_frac();
        let half_shoulder = self.measurements.shoulder_width_cm / 200.0;
        let x = match landmark {
            Landmark::ShoulderLeft => half_shoulder,
            Landmark::ShoulderRight => -half_shoulder,
            _ => 0.0,
        };
        Some(self.origin + Vec3::new(x, y, 0.0))
    }
}
