//! Demo Mode - Simulated drag run generator for testing
//!
//! Generates a plausible quarter-mile pass (stage, launch, gear changes,
//! finish) as a stream of [`PhysicsSnapshot`] values, for exercising the AI
//! physics client and dashboards without a live simulation.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::telemetry::{EcuConfig, PhysicsSnapshot};

const GEAR_RATIOS: [f64; 5] = [2.66, 1.78, 1.30, 1.00, 0.74];
const FINAL_DRIVE: f64 = 3.73;
const IDLE_RPM: f64 = 850.0;
const STAGE_RPM: f64 = 3500.0;
const SHIFT_RPM: f64 = 6800.0;
const SHIFT_MS: u64 = 400;
const QUARTER_MILE_FT: f64 = 1320.0;

/// Demo simulator that generates a full quarter-mile pass
pub struct DragRunSimulator {
    /// Vehicle being simulated
    config: EcuConfig,
    /// Time when simulation started (ms)
    start_time_ms: u64,
    /// Last update time (ms)
    last_update_ms: u64,
    /// Time of launch (ms from start)
    launch_at_ms: u64,
    /// Current run phase
    state: RunState,
    /// Current engine speed (smoothed)
    current_rpm: f64,
    /// Current vehicle speed (mph)
    speed: f64,
    /// Distance covered since launch (ft)
    distance_ft: f64,
    /// Selected gear, 0-based index into `GEAR_RATIOS`
    gear: usize,
    /// End of the current shift throttle lift (ms from start)
    shift_until_ms: u64,
    /// Longitudinal acceleration from the previous tick (g)
    last_accel_g: f64,
    /// Random number generator
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RunState {
    /// Staged at the line, revved against the brake
    Staged,
    /// On the throttle, covering the quarter mile
    Running,
    /// Past the finish line, coasting down
    Finished,
}

impl Default for DragRunSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragRunSimulator {
    /// Create a simulator with a default vehicle and random launch timing
    pub fn new() -> Self {
        Self::with_config(EcuConfig::default())
    }

    /// Create a simulator for a specific vehicle
    pub fn with_config(config: EcuConfig) -> Self {
        let mut rng = StdRng::from_entropy();
        let launch_at = rng.gen_range(2000..4000);
        Self::build(config, rng, launch_at)
    }

    /// Create a deterministic simulator for tests and replays
    pub fn with_seed(config: EcuConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let launch_at = rng.gen_range(2000..4000);
        Self::build(config, rng, launch_at)
    }

    fn build(config: EcuConfig, rng: StdRng, launch_at_ms: u64) -> Self {
        Self {
            config,
            start_time_ms: 0,
            last_update_ms: 0,
            launch_at_ms,
            state: RunState::Staged,
            current_rpm: IDLE_RPM,
            speed: 0.0,
            distance_ft: 0.0,
            gear: 0,
            shift_until_ms: 0,
            last_accel_g: 0.0,
            rng,
        }
    }

    /// True once the car has crossed the quarter-mile mark
    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    /// Vehicle configuration being simulated
    pub fn config(&self) -> &EcuConfig {
        &self.config
    }

    /// Update the simulation and produce the current snapshot
    ///
    /// # Arguments
    /// * `elapsed_ms` - Milliseconds since simulation started
    pub fn update(&mut self, elapsed_ms: u64) -> PhysicsSnapshot {
        if self.start_time_ms == 0 {
            self.start_time_ms = elapsed_ms;
        }

        let sim_time = elapsed_ms - self.start_time_ms;
        let delta_s = if self.last_update_ms > 0 {
            elapsed_ms.saturating_sub(self.last_update_ms) as f64 / 1000.0
        } else {
            0.0
        };
        self.last_update_ms = elapsed_ms;

        if self.state == RunState::Staged && sim_time >= self.launch_at_ms {
            self.state = RunState::Running;
        }

        match self.state {
            RunState::Staged => self.staged_snapshot(sim_time as f64 / 1000.0),
            RunState::Running | RunState::Finished => self.running_snapshot(sim_time, delta_s),
        }
    }

    /// Snapshot while staged: revving against the brake, no movement
    fn staged_snapshot(&mut self, t: f64) -> PhysicsSnapshot {
        // Rev toward stage RPM as launch approaches, holding with wobble
        let ramp = (t * 1000.0 / self.launch_at_ms.max(1) as f64).min(1.0);
        let wobble = 40.0 * (t * 3.1).sin() + 20.0 * (t * 8.7).sin();
        self.current_rpm = IDLE_RPM + (STAGE_RPM - IDLE_RPM) * ramp + wobble;

        let throttle = 0.3 * ramp;
        let torque = self.engine_torque(self.current_rpm, throttle);

        PhysicsSnapshot {
            rpm: self.current_rpm,
            throttle,
            speed: 0.0,
            gear: 1,
            torque,
            power: torque * self.current_rpm / 5252.0,
            boost: self.boost_pressure(self.current_rpm, throttle),
            tire_slip: 0.0,
            acceleration: 0.0,
            weight_transfer: 0.0,
            front_axle_load: self.config.vehicle_mass * 0.5,
            wheel_force: 0.0,
            traction_limit: self.config.tire_grip * self.config.vehicle_mass * 0.5,
            drag_force: 0.0,
            ecu_config: self.config.clone(),
        }
    }

    /// Snapshot during the run: integrate speed/distance, shift gears
    fn running_snapshot(&mut self, sim_time: u64, delta_s: f64) -> PhysicsSnapshot {
        let shifting = sim_time < self.shift_until_ms;
        let throttle = if self.state == RunState::Finished {
            0.0
        } else if shifting {
            0.2
        } else {
            1.0
        };

        let torque = self.engine_torque(self.current_rpm, throttle);
        let tire_radius_ft = self.config.tire_diameter / 24.0;
        let wheel_force = torque * GEAR_RATIOS[self.gear] * FINAL_DRIVE / tire_radius_ft;

        // Cd * A * mph^2 / 391 gives drag in pounds
        let drag_force =
            self.config.drag_coefficient * self.config.frontal_area * self.speed * self.speed
                / 391.0;

        // Load transfer lags one tick; close enough at demo rates
        let rear_static = self.config.vehicle_mass * 0.5;
        let weight_transfer =
            (self.last_accel_g * self.config.vehicle_mass * 0.18).min(rear_static);
        let front_axle_load = (self.config.vehicle_mass * 0.5 - weight_transfer).max(0.0);
        let traction_limit = self.config.tire_grip * (rear_static + weight_transfer);

        let applied_force = wheel_force.min(traction_limit);
        let tire_slip = if wheel_force > traction_limit && traction_limit > 0.0 {
            ((wheel_force / traction_limit - 1.0) * 100.0).min(30.0)
        } else {
            0.0
        };

        let accel_g = ((applied_force - drag_force) / self.config.vehicle_mass).max(-0.5);
        self.last_accel_g = accel_g;

        // 1 g sustained adds ~21.9 mph per second
        self.speed = (self.speed + accel_g * 21.937 * delta_s).max(0.0);
        if self.state == RunState::Running {
            self.distance_ft += self.speed * 1.4667 * delta_s;
            if self.distance_ft >= QUARTER_MILE_FT {
                self.state = RunState::Finished;
            }
        }

        // RPM = mph * gear ratio * final drive * 336 / tire diameter
        let geared_rpm =
            self.speed * GEAR_RATIOS[self.gear] * FINAL_DRIVE * 336.0 / self.config.tire_diameter;
        self.current_rpm = if self.gear == 0 && self.state == RunState::Running {
            // Clutch slip off the line keeps the engine near launch RPM
            geared_rpm.max(STAGE_RPM * 0.8)
        } else {
            geared_rpm.max(IDLE_RPM)
        };

        if self.state == RunState::Running
            && !shifting
            && self.current_rpm > SHIFT_RPM
            && self.gear < GEAR_RATIOS.len() - 1
        {
            self.gear += 1;
            self.shift_until_ms = sim_time + SHIFT_MS;
        }

        PhysicsSnapshot {
            rpm: self.current_rpm,
            throttle,
            speed: self.speed,
            gear: self.gear as i32 + 1,
            torque,
            power: torque * self.current_rpm / 5252.0,
            boost: self.boost_pressure(self.current_rpm, throttle),
            tire_slip,
            acceleration: accel_g,
            weight_transfer,
            front_axle_load,
            wheel_force,
            traction_limit,
            drag_force,
            ecu_config: self.config.clone(),
        }
    }

    /// Engine torque at the flywheel, including power adders
    fn engine_torque(&mut self, rpm: f64, throttle: f64) -> f64 {
        const PEAK_TORQUE: f64 = 420.0;

        // Broad flat curve peaking near 4800 RPM
        let curve = 1.0 - ((rpm - 4800.0) / 4000.0).powi(2) * 0.35;
        let mut torque = PEAK_TORQUE * curve.clamp(0.4, 1.0) * throttle;

        // Boost multiplies torque roughly linearly with manifold pressure
        let boost = self.boost_pressure(rpm, throttle);
        torque *= 1.0 + boost / 29.4;

        // Nitrous comes in at wide-open throttle only
        if self.config.has_nitrous && throttle > 0.9 && rpm > 3000.0 {
            torque += self.config.nitrous_power * 5252.0 / rpm;
        }

        // Dyno-style noise
        torque * (1.0 + self.rng.gen_range(-0.02..0.02))
    }

    /// Manifold boost pressure for the fitted power adders (psi)
    fn boost_pressure(&self, rpm: f64, throttle: f64) -> f64 {
        if self.config.has_turbo {
            // Turbo spools with RPM
            (rpm / 7000.0).min(1.0) * 14.7 * throttle
        } else if self.config.has_supercharger {
            // Blower makes boost everywhere
            8.0 * throttle
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> DragRunSimulator {
        DragRunSimulator::with_seed(EcuConfig::default(), 42)
    }

    #[test]
    fn test_staged_before_launch() {
        let mut sim = seeded();
        let snapshot = sim.update(100);

        assert_eq!(snapshot.speed, 0.0);
        assert_eq!(snapshot.gear, 1);
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_run_builds_speed() {
        let mut sim = seeded();

        let mut last_speed = 0.0;
        for ms in (0..10_000).step_by(100) {
            let snapshot = sim.update(ms);
            last_speed = snapshot.speed;
        }
        assert!(last_speed > 60.0, "Speed {} too low after 10s", last_speed);
    }

    #[test]
    fn test_run_shifts_through_gears() {
        let mut sim = seeded();

        let mut max_gear = 1;
        for ms in (0..20_000).step_by(50) {
            let snapshot = sim.update(ms);
            max_gear = max_gear.max(snapshot.gear);
        }
        assert!(max_gear >= 3, "Only reached gear {}", max_gear);
    }

    #[test]
    fn test_run_finishes_quarter_mile() {
        let mut sim = seeded();

        for ms in (0..60_000).step_by(50) {
            sim.update(ms);
            if sim.is_finished() {
                return;
            }
        }
        panic!("Run never finished");
    }

    #[test]
    fn test_traction_bounds_launch_forces() {
        let mut sim = seeded();

        for ms in (0..15_000).step_by(50) {
            let snapshot = sim.update(ms);
            assert!(
                snapshot.acceleration * snapshot.ecu_config.vehicle_mass
                    <= snapshot.traction_limit + 1e-6,
                "Applied force exceeds traction limit at {}ms",
                ms
            );
            assert!(snapshot.front_axle_load >= 0.0);
            assert!(snapshot.tire_slip >= 0.0 && snapshot.tire_slip <= 30.0);
        }
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut a = seeded();
        let mut b = seeded();

        for ms in (0..5_000).step_by(250) {
            assert_eq!(a.update(ms), b.update(ms));
        }
    }
}
