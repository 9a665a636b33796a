//! Body measurements.
//!
//! An immutable snapshot per fitting operation. All lengths are in
//! centimeters, weight in kilograms.

use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Body type used to pick mannequin proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

/// Addresses one scalar of [`BodyMeasurements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKey {
    Height,
    Weight,
    Bust,
    Waist,
    Hips,
    ShoulderWidth,
}

impl MeasurementKey {
    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementKey::Height => "height",
            MeasurementKey::Weight => "weight",
            MeasurementKey::Bust => "bust",
            MeasurementKey::Waist => "waist",
            MeasurementKey::Hips => "hips",
            MeasurementKey::ShoulderWidth => "shoulder_width",
        }
    }
}

/// The six-field body description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub gender: Gender,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub bust_cm: f32,
    pub waist_cm: f32,
    pub hips_cm: f32,
    pub shoulder_width_cm: f32,
}

impl BodyMeasurements {
    /// Accepted range for every length, in centimeters.
    pub const LENGTH_RANGE_CM: (f32, f32) = (20.0, 260.0);
    /// Accepted range for weight, in kilograms.
    pub const WEIGHT_RANGE_KG: (f32, f32) = (20.0, 300.0);

    /// Body mass index: `weight / height_m²`. Zero for a non-positive height.
    pub fn bmi(&self) -> f32 {
        let h = self.height_cm / 100.0;
        if h <= 0.0 {
            return 0.0;
        }
        self.weight_kg / (h * h)
    }

    /// Returns the value addressed by `key`.
    pub fn measurement(&self, key: MeasurementKey) -> f32 {
        match key {
            MeasurementKey::Height => self.height_cm,
            MeasurementKey::Weight => self.weight_kg,
            MeasurementKey::Bust => self.bust_cm,
            MeasurementKey::Waist => self.waist_cm,
            MeasurementKey::Hips => self.hips_cm,
            MeasurementKey::ShoulderWidth => self.shoulder_width_cm,
        }
    }

    /// Returns a copy with one value replaced.
    pub fn with(mut self, key: MeasurementKey, value: f32) -> Self {
        match key {
            MeasurementKey::Height => self.height_cm = value,
            MeasurementKey::Weight => self.weight_kg = value,
            MeasurementKey::Bust => self.bust_cm = value,
            MeasurementKey::Waist => self.waist_cm = value,
            MeasurementKey::Hips => self.hips_cm = value,
            MeasurementKey::ShoulderWidth => self.shoulder_width_cm = value,
        }
        self
    }

    /// Reference male proportions.
    pub fn reference_male() -> Self {
        Self {
            gender: Gender::Male,
            height_cm: 178.0,
            weight_kg: 75.0,
            bust_cm: 100.0,
            waist_cm: 84.0,
            hips_cm: 98.0,
            shoulder_width_cm: 46.0,
        }
    }

    /// Checks that every value is finite and physically plausible.
    ///
    /// Fitting itself never rejects measurements; this is for input surfaces.
    pub fn validate(&self) -> DrapeResult<()> {
        let (lo, hi) = Self::LENGTH_RANGE_CM;
        for key in [
            MeasurementKey::Height,
            MeasurementKey::Bust,
            MeasurementKey::Waist,
            MeasurementKey::Hips,
            MeasurementKey::ShoulderWidth,
        ] {
            let v = self.measurement(key);
            if !v.is_finite() || v < lo || v > hi {
                return Err(DrapeError::InvalidMeasurements(format!(
                    "{} = {v} cm is outside [{lo}, {hi}]",
                    key.name()
                )));
            }
        }
        let (lo, hi) = Self::WEIGHT_RANGE_KG;
        if !self.weight_kg.is_finite() || self.weight_kg < lo || self.weight_kg > hi {
            return Err(DrapeError::InvalidMeasurements(format!(
                "weight = {} kg is outside [{lo}, {hi}]",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

impl Default for BodyMeasurements {
    /// The baseline body: every zone baseline is met exactly.
    fn default() -> Self {
        Self {
            gender: Gender::Female,
            height_cm: 170.0,
            weight_kg: 62.0,
            bust_cm: 90.0,
            waist_cm: 70.0,
            hips_cm: 95.0,
            shoulder_width_cm: 40.0,
        }
    }
}
