use log::info;

use crate::config::MissionConfig;
use crate::control::satellite::{CraftState, Satellite};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum MissionStatus {
    Nominal,
    OrbitAchieved,
    FuelDepleted,
    AtmosphereDecay,
}

impl MissionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MissionStatus::FuelDepleted | MissionStatus::AtmosphereDecay
        )
    }

    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            MissionStatus::FuelDepleted => Some("FUEL DEPLETED! MISSION FAILED."),
            MissionStatus::AtmosphereDecay => {
                Some("ORBIT DECAY - ENTERING ATMOSPHERE! MISSION FAILED.")
            }
            MissionStatus::Nominal | MissionStatus::OrbitAchieved => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionLimits {
    pub atmosphere_altitude: f64,
    pub altitude_min: f64,
    pub altitude_max: f64,
    pub eccentricity_ceiling: f64,
}

impl MissionLimits {
    pub fn from_config(config: &MissionConfig) -> Self {
        MissionLimits {
            atmosphere_altitude: config.atmosphere_altitude,
            altitude_min: config.target_altitude_min,
            altitude_max: config.target_altitude_max,
            eccentricity_ceiling: config.target_eccentricity,
        }
    }

    pub fn orbit_achieved(&self, distance: f64, eccentricity: f64) -> bool {
        (self.altitude_min..=self.altitude_max).contains(&distance)
            && eccentricity < self.eccentricity_ceiling
    }

    pub fn in_atmosphere(&self, distance: f64) -> bool {
        distance <= self.atmosphere_altitude
    }
}

pub struct Mission {
    limits: MissionLimits,
    status: MissionStatus,
}

impl Mission {
    pub fn new(limits: MissionLimits) -> Self {
        Mission {
            limits,
            status: MissionStatus::Nominal,
        }
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn limits(&self) -> &MissionLimits {
        &self.limits
    }

    /// Folds the satellite's latest distance and fuel plus the current
    /// eccentricity into the mission status. Returns the new status on a change.
    ///
    /// Fuel is checked before the atmosphere. Entering either failure freezes
    /// the satellite, and the failure is never left again.
    pub fn evaluate(
        &mut self,
        satellite: &mut Satellite,
        eccentricity: f64,
    ) -> Option<MissionStatus> {
        if self.status.is_terminal() {
            return None;
        }

        let next = if satellite.fuel() <= 0.0 {
            satellite.freeze(CraftState::FuelDepleted);
            MissionStatus::FuelDepleted
        } else if self.limits.in_atmosphere(satellite.distance()) {
            satellite.freeze(CraftState::Crashed);
            MissionStatus::AtmosphereDecay
        } else if self.limits.orbit_achieved(satellite.distance(), eccentricity) {
            MissionStatus::OrbitAchieved
        } else {
            MissionStatus::Nominal
        };

        if next == self.status {
            return None;
        }

        info!(
            "mission status {:?} -> {:?} (altitude {:.1}, eccentricity {:.4}, fuel {:.0})",
            self.status,
            next,
            satellite.distance(),
            eccentricity,
            satellite.fuel()
        );
        self.status = next;
        Some(next)
    }
}
