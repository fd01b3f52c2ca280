//! Correction factors returned by the AI physics endpoint
//!
//! The simulation applies these as straight multipliers on its own computed
//! values; 1.0 everywhere means "no correction". The neutral constant doubles
//! as the fallback for every failed endpoint call, so the simulation can
//! always apply the result without checking for errors.

use serde::{Deserialize, Serialize};

/// Multiplicative adjustments applied to the local physics simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionFactors {
    /// Multiplier on tire grip
    pub grip_multiplier: f64,
    /// Multiplier on weight transfer
    pub weight_transfer_multiplier: f64,
    /// Multiplier on tire slip
    pub slip_multiplier: f64,
    /// Multiplier on aerodynamic drag
    pub drag_multiplier: f64,
    /// Multiplier on the traction limit
    pub traction_multiplier: f64,
    /// Free-text advisory note from the endpoint
    pub ai_notes: String,
}

impl CorrectionFactors {
    /// Neutral corrections: every multiplier 1.0, note empty
    ///
    /// Shared fallback for every failed endpoint call; never mutated.
    pub const NEUTRAL: CorrectionFactors = CorrectionFactors {
        grip_multiplier: 1.0,
        weight_transfer_multiplier: 1.0,
        slip_multiplier: 1.0,
        drag_multiplier: 1.0,
        traction_multiplier: 1.0,
        ai_notes: String::new(),
    };

    /// Neutral corrections (see [`CorrectionFactors::NEUTRAL`])
    pub fn neutral() -> Self {
        Self::NEUTRAL
    }

    /// True when every multiplier is exactly 1.0
    pub fn is_neutral(&self) -> bool {
        self.grip_multiplier == 1.0
            && self.weight_transfer_multiplier == 1.0
            && self.slip_multiplier == 1.0
            && self.drag_multiplier == 1.0
            && self.traction_multiplier == 1.0
    }
}

impl Default for CorrectionFactors {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Where a set of correction factors came from
///
/// Both variants carry a usable [`CorrectionFactors`] value, so a caller
/// that does not care about provenance can just take `factors()`.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrectionSource {
    /// Factors returned by the remote endpoint
    Remote(CorrectionFactors),
    /// Neutral factors substituted after a failed call
    Fallback(CorrectionFactors),
}

impl CorrectionSource {
    /// The carried correction factors, regardless of provenance
    pub fn factors(&self) -> &CorrectionFactors {
        match self {
            CorrectionSource::Remote(factors) | CorrectionSource::Fallback(factors) => factors,
        }
    }

    /// Consume the source, yielding the carried factors
    pub fn into_factors(self) -> CorrectionFactors {
        match self {
            CorrectionSource::Remote(factors) | CorrectionSource::Fallback(factors) => factors,
        }
    }

    /// True when the remote call failed and neutral factors were substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self, CorrectionSource::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn neutral_has_unit_multipliers_and_empty_note() {
        let neutral = CorrectionFactors::NEUTRAL;
        assert_eq!(neutral.grip_multiplier, 1.0);
        assert_eq!(neutral.weight_transfer_multiplier, 1.0);
        assert_eq!(neutral.slip_multiplier, 1.0);
        assert_eq!(neutral.drag_multiplier, 1.0);
        assert_eq!(neutral.traction_multiplier, 1.0);
        assert_eq!(neutral.ai_notes, "");
        assert!(neutral.is_neutral());
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(CorrectionFactors::default(), CorrectionFactors::NEUTRAL);
    }

    #[test]
    fn deserializes_endpoint_response_shape() {
        let json = r#"{
            "gripMultiplier": 0.8,
            "weightTransferMultiplier": 1.2,
            "slipMultiplier": 0.9,
            "dragMultiplier": 1.0,
            "tractionMultiplier": 0.95,
            "aiNotes": "loose rear"
        }"#;
        let factors: CorrectionFactors = serde_json::from_str(json).unwrap();
        assert_eq!(factors.grip_multiplier, 0.8);
        assert_eq!(factors.weight_transfer_multiplier, 1.2);
        assert_eq!(factors.slip_multiplier, 0.9);
        assert_eq!(factors.drag_multiplier, 1.0);
        assert_eq!(factors.traction_multiplier, 0.95);
        assert_eq!(factors.ai_notes, "loose rear");
        assert!(!factors.is_neutral());
    }

    #[test]
    fn source_accessors() {
        let remote = CorrectionSource::Remote(CorrectionFactors {
            grip_multiplier: 0.8,
            ..CorrectionFactors::NEUTRAL
        });
        assert!(!remote.is_fallback());
        assert_eq!(remote.factors().grip_multiplier, 0.8);

        let fallback = CorrectionSource::Fallback(CorrectionFactors::NEUTRAL);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_factors(), CorrectionFactors::NEUTRAL);
    }
}
