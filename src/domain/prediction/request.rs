//! Validated prediction request

use serde::Serialize;

/// A fully validated set of patient vitals.
///
/// Instances can only be produced by the input validator (or crate-internal
/// code), so holding a `PredictionRequest` is proof that every field passed
/// its presence and range checks. Fields are private and the struct carries
/// no mutators.
///
/// Serializes to the worker wire format: a flat JSON object with camelCase
/// keys and numeric fields as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    name: String,
    age: i64,
    gender: i64,
    blood_pressure: i64,
    cholesterol: i64,
    chest_pain_type: i64,
}

impl PredictionRequest {
    pub(crate) fn new(
        name: String,
        age: i64,
        gender: i64,
        blood_pressure: i64,
        cholesterol: i64,
        chest_pain_type: i64,
    ) -> Self {
        Self {
            name,
            age,
            gender,
            blood_pressure,
            cholesterol,
            chest_pain_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// 1 for male, 0 for female
    pub fn gender(&self) -> i64 {
        self.gender
    }

    /// Resting blood pressure in mm Hg
    pub fn blood_pressure(&self) -> i64 {
        self.blood_pressure
    }

    /// Serum cholesterol in mg/dl
    pub fn cholesterol(&self) -> i64 {
        self.cholesterol
    }

    /// Chest pain type, 0-3
    pub fn chest_pain_type(&self) -> i64 {
        self.chest_pain_type
    }
}
