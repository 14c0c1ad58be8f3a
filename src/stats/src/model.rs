//! Winner record for a single race edition.

use serde::{Deserialize, Serialize};

/// Seconds in one hour, used to turn a race time into km/h.
const SECS_PER_HOUR: f64 = 3600.0;

/// The cyclist who won one edition of a race.
///
/// Records are immutable once built and are assumed valid when supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    name: String,
    year: i32,
    team: String,
    nationality: String,
    stages_won: u32,
    km_ridden: u32,
    /// Total winning time of the edition in seconds, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    race_time_secs: Option<u32>,
}

impl Winner {
    pub fn new(
        name: impl Into<String>,
        year: i32,
        team: impl Into<String>,
        nationality: impl Into<String>,
        stages_won: u32,
        km_ridden: u32,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            team: team.into(),
            nationality: nationality.into(),
            stages_won,
            km_ridden,
            race_time_secs: None,
        }
    }

    /// Attach the total winning time of the edition.
    pub fn with_race_time_secs(mut self, secs: u32) -> Self {
        self.race_time_secs = Some(secs);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn stages_won(&self) -> u32 {
        self.stages_won
    }

    pub fn km_ridden(&self) -> u32 {
        self.km_ridden
    }

    pub fn race_time_secs(&self) -> Option<u32> {
        self.race_time_secs
    }

    /// Average speed over the whole edition in km/h.
    ///
    /// Returns `None` when no race time is recorded or it is zero.
    pub fn average_speed_kmh(&self) -> Option<f64> {
        match self.race_time_secs {
            Some(secs) if secs > 0 => {
                Some(self.km_ridden as f64 / (secs as f64 / SECS_PER_HOUR))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_speed() {
        // 3600 km in 90 hours
        let winner = Winner::new("A", 2000, "T1", "FR", 3, 3600).with_race_time_secs(90 * 3600);
        let speed = winner.average_speed_kmh().unwrap();
        assert!((speed - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_speed_missing_or_zero_time() {
        let winner = Winner::new("A", 2000, "T1", "FR", 3, 3600);
        assert_eq!(winner.average_speed_kmh(), None);

        let winner = winner.with_race_time_secs(0);
        assert_eq!(winner.average_speed_kmh(), None);
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = Winner::new("A", 2000, "T1", "FR", 3, 3500);
        let b = Winner::new("A", 2000, "T1", "FR", 3, 3500);
        let c = Winner::new("A", 2000, "T1", "FR", 4, 3500);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, b.clone().with_race_time_secs(1));
    }

    #[test]
    fn test_winner_deserialize() {
        let json = r#"{
            "name": "Miguel Indurain",
            "year": 1991,
            "team": "Banesto",
            "nationality": "Spain",
            "stages_won": 2,
            "km_ridden": 3914
        }"#;

        let winner: Winner = serde_json::from_str(json).unwrap();
        assert_eq!(winner.name(), "Miguel Indurain");
        assert_eq!(winner.year(), 1991);
        assert_eq!(winner.km_ridden(), 3914);
        assert_eq!(winner.race_time_secs(), None);
    }
}
