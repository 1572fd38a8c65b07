use crate::control::mission::MissionStatus;
use crate::simulation::{Snapshot, TickReport};
use crate::utils::vector2d::Vector2D;

pub struct Telemetry {
    pub log: Vec<String>,
    log_interval: u64,
    tick_rate: u32,
    ticks: u64,
    max_altitude: f64,
    min_altitude: f64,
    min_fuel: f64,
    burns: u64,
    eccentricity_history: Vec<(u64, f64)>,
    status_changes: Vec<(MissionStatus, u64)>,
}

impl Telemetry {
    /// Keeps one log line every `log_interval` ticks.
    pub fn new(tick_rate: u32, log_interval: u64) -> Self {
        Telemetry {
            log: Vec::new(),
            log_interval: log_interval.max(1),
            tick_rate: tick_rate.max(1),
            ticks: 0,
            max_altitude: 0.0,
            min_altitude: f64::MAX,
            min_fuel: f64::MAX,
            burns: 0,
            eccentricity_history: Vec::new(),
            status_changes: Vec::new(),
        }
    }

    fn format_vector2d(vec: &Vector2D, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}",
            vec.x,
            vec.y,
            precision = precision
        )
    }

    fn format_time(&self, tick: u64) -> String {
        let elapsed_time = tick as f64 / f64::from(self.tick_rate);
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn collect_data(&mut self, report: &TickReport, snapshot: &Snapshot) {
        self.ticks += 1;
        self.burns += u64::from(report.burns);

        if snapshot.altitude > self.max_altitude {
            self.max_altitude = snapshot.altitude;
        }
        if snapshot.altitude < self.min_altitude {
            self.min_altitude = snapshot.altitude;
        }
        if snapshot.fuel < self.min_fuel {
            self.min_fuel = snapshot.fuel;
        }
        if let Some(eccentricity) = report.eccentricity_update {
            self.eccentricity_history.push((report.tick, eccentricity));
        }
        if let Some(status) = report.transition {
            self.status_changes.push((status, report.tick));
        }

        if report.tick % self.log_interval == 0 {
            self.log.push(format!(
                "Time: {} | Position: {} | Velocity: {} | Altitude: {:.1} | Fuel: {:.0} | Eccentricity: {:.4} | Status: {:?}",
                self.format_time(report.tick),
                Self::format_vector2d(&snapshot.position, 1),
                Self::format_vector2d(&snapshot.velocity, 3),
                snapshot.altitude,
                snapshot.fuel,
                snapshot.eccentricity,
                snapshot.status
            ));
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn burns(&self) -> u64 {
        self.burns
    }

    pub fn altitude_range(&self) -> Option<(f64, f64)> {
        (self.ticks > 0).then_some((self.min_altitude, self.max_altitude))
    }

    pub fn eccentricity_history(&self) -> &[(u64, f64)] {
        &self.eccentricity_history
    }

    pub fn status_changes(&self) -> &[(MissionStatus, u64)] {
        &self.status_changes
    }

    pub fn summary(&self) -> String {
        let mut lines = vec!["--- Mission Summary ---".to_string()];
        lines.push(format!(
            "Duration: {} ({} ticks)",
            self.format_time(self.ticks),
            self.ticks
        ));
        if let Some((min, max)) = self.altitude_range() {
            lines.push(format!("Altitude: {:.1} - {:.1}", min, max));
            lines.push(format!("Min Fuel: {:.0}", self.min_fuel));
        }
        lines.push(format!("Thruster Burns: {}", self.burns));

        lines.push("--- Eccentricity ---".to_string());
        for (tick, eccentricity) in &self.eccentricity_history {
            lines.push(format!("{}: {:.4}", self.format_time(*tick), eccentricity));
        }

        lines.push("--- Status Changes ---".to_string());
        for (status, tick) in &self.status_changes {
            lines.push(format!("{:?} at {}", status, self.format_time(*tick)));
        }
        lines.join("\n")
    }

    pub fn display_data(&self) {
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("{}", self.summary());
    }
}
