//! Serializable snapshot of every statistic for one race.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::SummaryConfig;
use crate::stats::RaceStatistics;

/// Average stages won for one team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStages {
    pub team: String,
    pub average_stages_won: f64,
}

/// Summary of a race history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceSummary {
    pub race_name: String,
    pub editions: usize,
    pub distinct_winners: usize,
    pub total_distance_km: u64,
    pub shortest_edition_km: u32,
    pub all_winners_won_a_stage: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest_winner: Option<String>,
    /// Sorted for stable output
    pub winning_teams: Vec<String>,
    pub wins_by_nationality: BTreeMap<String, usize>,
    pub distance_threshold_km: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub winners_below_threshold: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_stages: Vec<TeamStages>,
}

impl RaceSummary {
    /// Pretty-printed JSON representation.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RaceStatistics {
    /// Compute every statistic at once.
    pub fn summary(&self, config: &SummaryConfig) -> RaceSummary {
        debug!(
            "Building summary for {} (threshold {} km, {} teams)",
            self.race_name(),
            config.distance_threshold_km,
            config.teams.len()
        );

        let mut winning_teams: Vec<String> = self.winning_teams().into_iter().collect();
        winning_teams.sort();

        let team_stages = config
            .teams
            .iter()
            .map(|team| TeamStages {
                team: team.clone(),
                average_stages_won: self.average_stages_won(team),
            })
            .collect();

        RaceSummary {
            race_name: self.race_name().to_string(),
            editions: self.edition_count(),
            distinct_winners: self.distinct_winner_count(),
            total_distance_km: self.total_distance(),
            shortest_edition_km: self.shortest_edition_distance(),
            all_winners_won_a_stage: self.all_winners_won_a_stage(),
            fastest_winner: self.fastest_winner_name(),
            winning_teams,
            wins_by_nationality: self.winner_count_by_nationality().into_iter().collect(),
            distance_threshold_km: config.distance_threshold_km,
            winners_below_threshold: self
                .winners_with_distance_below(config.distance_threshold_km),
            team_stages,
        }
    }
}
