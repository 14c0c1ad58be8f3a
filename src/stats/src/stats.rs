//! Statistics over the historical winners of one race.
//!
//! Every query is a pure read of the stored winners. Queries over an empty
//! history return a neutral value (0, 0.0, `None`, empty collection) instead
//! of an error.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, warn};

use crate::error::StatsError;
use crate::model::Winner;

/// One race and the winners of all its editions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RaceStatistics {
    race_name: String,
    winners: Vec<Winner>,
}

impl RaceStatistics {
    /// Build statistics from a race name and its winners.
    ///
    /// The winners are copied in iteration order. Fails when the race name is
    /// empty or blank.
    pub fn new(
        race_name: impl Into<String>,
        winners: impl IntoIterator<Item = Winner>,
    ) -> Result<Self, StatsError> {
        let race_name = race_name.into();
        if race_name.trim().is_empty() {
            return Err(StatsError::EmptyRaceName);
        }

        let winners: Vec<Winner> = winners.into_iter().collect();

        let mut years = HashSet::new();
        for winner in &winners {
            if !years.insert(winner.year()) {
                warn!(
                    "Duplicate year {} in winners of {}",
                    winner.year(),
                    race_name
                );
            }
        }

        debug!("Loaded {} winners for {}", winners.len(), race_name);

        Ok(Self { race_name, winners })
    }

    /// Build statistics for a race with no recorded winners yet.
    pub fn with_name(race_name: impl Into<String>) -> Result<Self, StatsError> {
        Self::new(race_name, Vec::new())
    }

    pub fn race_name(&self) -> &str {
        &self.race_name
    }

    /// Independent copy of all winners in insertion order.
    pub fn winners(&self) -> Vec<Winner> {
        self.winners.clone()
    }

    /// Number of recorded editions.
    pub fn edition_count(&self) -> usize {
        self.winners.len()
    }

    /// First winner with the given name.
    pub fn find_winner_by_name(&self, name: &str) -> Option<Winner> {
        self.winners.iter().find(|w| w.name() == name).cloned()
    }

    /// First winner of the given year.
    pub fn find_winner_by_year(&self, year: i32) -> Option<Winner> {
        self.winners.iter().find(|w| w.year() == year).cloned()
    }

    /// Names of winners whose edition was shorter than `km`.
    ///
    /// A repeat winner appears once, at its first qualifying edition.
    pub fn winners_with_distance_below(&self, km: u32) -> Vec<String> {
        let mut seen = HashSet::new();
        self.winners
            .iter()
            .filter(|w| w.km_ridden() < km)
            .filter(|w| seen.insert(w.name()))
            .map(|w| w.name().to_string())
            .collect()
    }

    /// Number of distinct cyclists, counting a repeat winner once.
    pub fn distinct_winner_count(&self) -> usize {
        self.winners
            .iter()
            .map(Winner::name)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Whether every winner took at least one stage in their edition.
    pub fn all_winners_won_a_stage(&self) -> bool {
        self.winners.iter().all(|w| w.stages_won() >= 1)
    }

    /// Distinct teams that have won the race.
    pub fn winning_teams(&self) -> HashSet<String> {
        self.winners.iter().map(|w| w.team().to_string()).collect()
    }

    /// Distance of the shortest edition in km, 0 with no winners.
    pub fn shortest_edition_distance(&self) -> u32 {
        self.winners
            .iter()
            .map(Winner::km_ridden)
            .min()
            .unwrap_or(0)
    }

    /// Name of the winner with the highest average speed.
    ///
    /// Winners without a recorded race time are skipped.
    pub fn fastest_winner_name(&self) -> Option<String> {
        fastest(self.winners.iter())
    }

    /// Same as [`Self::fastest_winner_name`], among winners of one nationality.
    pub fn fastest_winner_name_by_nationality(&self, nationality: &str) -> Option<String> {
        fastest(
            self.winners
                .iter()
                .filter(|w| w.nationality() == nationality),
        )
    }

    /// Sum of the distance of every edition in km.
    pub fn total_distance(&self) -> u64 {
        self.winners.iter().map(|w| w.km_ridden() as u64).sum()
    }

    /// Mean stages won by winners riding for `team`, 0.0 if none did.
    pub fn average_stages_won(&self, team: &str) -> f64 {
        let (count, total) = self
            .winners
            .iter()
            .filter(|w| w.team() == team)
            .fold((0usize, 0u64), |(count, total), w| {
                (count + 1, total + w.stages_won() as u64)
            });

        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }

    /// Winners grouped by nationality, keeping their relative order.
    pub fn winners_by_nationality(&self) -> HashMap<String, Vec<Winner>> {
        let mut groups: HashMap<String, Vec<Winner>> = HashMap::new();
        for winner in &self.winners {
            groups
                .entry(winner.nationality().to_string())
                .or_default()
                .push(winner.clone());
        }
        groups
    }

    /// Number of wins per nationality.
    pub fn winner_count_by_nationality(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for winner in &self.winners {
            *counts.entry(winner.nationality().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

fn fastest<'a>(winners: impl Iterator<Item = &'a Winner>) -> Option<String> {
    winners
        .filter_map(|w| w.average_speed_kmh().map(|speed| (w, speed)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(w, _)| w.name().to_string())
}

impl fmt::Display for RaceStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - [{} winners]", self.race_name, self.winners.len())
    }
}
