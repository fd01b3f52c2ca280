//! Physics telemetry types
//!
//! A [`PhysicsSnapshot`] is the per-tick state of a simulated vehicle,
//! sampled by the simulation loop and forwarded to the AI physics endpoint.
//! Wire names are camelCase to match the JSON the endpoint expects; no unit
//! or range validation happens at this layer — the simulation owns its own
//! invariants.

use serde::{Deserialize, Serialize};

/// Per-tick vehicle state forwarded to the AI physics endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsSnapshot {
    /// Engine speed (RPM)
    pub rpm: f64,
    /// Throttle position, 0.0 (closed) to 1.0 (wide open)
    pub throttle: f64,
    /// Vehicle speed (mph)
    pub speed: f64,
    /// Selected gear
    pub gear: i32,
    /// Engine torque (lb-ft)
    pub torque: f64,
    /// Engine power (hp)
    pub power: f64,
    /// Boost pressure (psi)
    pub boost: f64,
    /// Tire slip (percent)
    pub tire_slip: f64,
    /// Longitudinal acceleration (g)
    pub acceleration: f64,
    /// Load shifted from the front to the rear axle under acceleration (lb)
    pub weight_transfer: f64,
    /// Front axle load (lb)
    pub front_axle_load: f64,
    /// Force at the drive wheels (lb)
    pub wheel_force: f64,
    /// Maximum force the tires can transmit (lb)
    pub traction_limit: f64,
    /// Aerodynamic drag force (lb)
    pub drag_force: f64,
    /// Static per-vehicle tuning parameters
    pub ecu_config: EcuConfig,
}

impl Default for PhysicsSnapshot {
    fn default() -> Self {
        // Staged at the line, engine idling
        Self {
            rpm: 850.0,
            throttle: 0.0,
            speed: 0.0,
            gear: 1,
            torque: 0.0,
            power: 0.0,
            boost: 0.0,
            tire_slip: 0.0,
            acceleration: 0.0,
            weight_transfer: 0.0,
            front_axle_load: 1600.0,
            wheel_force: 0.0,
            traction_limit: 1760.0,
            drag_force: 0.0,
            ecu_config: EcuConfig::default(),
        }
    }
}

/// Static per-vehicle tuning parameters included in each request for context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcuConfig {
    /// Vehicle mass including driver (lb)
    pub vehicle_mass: f64,
    /// Tire grip coefficient
    pub tire_grip: f64,
    /// Turbocharger fitted
    pub has_turbo: bool,
    /// Supercharger fitted
    pub has_supercharger: bool,
    /// Nitrous system fitted
    pub has_nitrous: bool,
    /// Nitrous power adder (hp)
    pub nitrous_power: f64,
    /// Aerodynamic drag coefficient
    pub drag_coefficient: f64,
    /// Frontal area (sq ft)
    pub frontal_area: f64,
    /// Driven tire diameter (inches)
    pub tire_diameter: f64,
}

impl Default for EcuConfig {
    fn default() -> Self {
        // Typical street/strip V8 sedan
        Self {
            vehicle_mass: 3200.0,
            tire_grip: 1.1,
            has_turbo: false,
            has_supercharger: false,
            has_nitrous: false,
            nitrous_power: 0.0,
            drag_coefficient: 0.32,
            frontal_area: 22.0,
            tire_diameter: 28.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let snapshot = PhysicsSnapshot::default();
        let value = serde_json::to_value(&snapshot).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "acceleration",
                "boost",
                "dragForce",
                "ecuConfig",
                "frontAxleLoad",
                "gear",
                "power",
                "rpm",
                "speed",
                "throttle",
                "tireSlip",
                "torque",
                "tractionLimit",
                "weightTransfer",
                "wheelForce",
            ]
        );
    }

    #[test]
    fn ecu_config_serializes_with_camel_case_keys() {
        let config = EcuConfig::default();
        let value = serde_json::to_value(&config).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "dragCoefficient",
                "frontalArea",
                "hasNitrous",
                "hasSupercharger",
                "hasTurbo",
                "nitrousPower",
                "tireDiameter",
                "tireGrip",
                "vehicleMass",
            ]
        );
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = PhysicsSnapshot {
            rpm: 6400.0,
            throttle: 1.0,
            speed: 88.5,
            gear: 3,
            ..PhysicsSnapshot::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PhysicsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
