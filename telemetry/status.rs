use medisense_engine::{PriorityInputs, RiskInputs};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Reported model identifier for the mock risk network.
const MODEL_VERSION: &str = "MediSense-RiskNet v2.4.1";

/// One operational status snapshot served to the dashboard.
///
/// The seven leading fields feed scoring; the trailing four are passthrough
/// display fields the engine never reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsStatus {
    /// Live road congestion estimate.
    pub traffic_risk: f64,
    /// Adverse weather estimate.
    pub weather_risk: f64,
    /// Historical share of delayed runs.
    pub historical_delay_rate: f64,
    /// Density of active incidents.
    pub incident_density: f64,
    /// Emergency level of the pending shipment.
    pub emergency_level: f64,
    /// How quickly the cargo loses clinical value.
    pub time_sensitivity: f64,
    /// Criticality of the supplies being moved.
    pub critical_supply_factor: f64,
    /// Risk model identifier (display only).
    pub model_version: String,
    /// Risk model accuracy label (display only).
    pub accuracy: String,
    /// Number of fleets currently active (display only).
    pub active_fleets: u32,
    /// Network-wide on-time rate label (display only).
    pub on_time_rate: String,
}

impl LogisticsStatus {
    /// Extracts the delay risk inputs for scoring.
    #[must_use]
    pub const fn risk_inputs(&self) -> RiskInputs {
        RiskInputs {
            traffic_risk: self.traffic_risk,
            weather_risk: self.weather_risk,
            historical_delay_rate: self.historical_delay_rate,
            incident_density: self.incident_density,
        }
    }

    /// Extracts the medical priority inputs for scoring.
    #[must_use]
    pub const fn priority_inputs(&self) -> PriorityInputs {
        PriorityInputs {
            emergency_level: self.emergency_level,
            time_sensitivity: self.time_sensitivity,
            critical_supply_factor: self.critical_supply_factor,
        }
    }
}

/// Draws mock status snapshots from an owned random source.
///
/// Seeded construction keeps the stream reproducible so numeric properties
/// are testable; production bootstrap seeds from entropy.
#[derive(Debug)]
pub struct StatusSampler {
    rng: SmallRng,
}

impl StatusSampler {
    /// Creates a sampler with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a sampler seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Draws the next status snapshot.
    pub fn sample(&mut self) -> LogisticsStatus {
        LogisticsStatus {
            traffic_risk: self.rng.gen_range(0.15..0.95),
            weather_risk: self.rng.gen_range(0.05..0.75),
            historical_delay_rate: self.rng.gen_range(0.08..0.35),
            incident_density: self.rng.gen_range(0.0..0.45),
            emergency_level: self.rng.gen_range(0.35..1.0),
            time_sensitivity: self.rng.gen_range(0.5..1.0),
            critical_supply_factor: self.rng.gen_range(0.3..0.95),
            model_version: MODEL_VERSION.into(),
            accuracy: format!("{:.1}%", self.rng.gen_range(92.5..97.5)),
            active_fleets: self.rng.gen_range(8..=24),
            on_time_rate: format!("{:.1}%", self.rng.gen_range(93.0..99.0)),
        }
    }
}
