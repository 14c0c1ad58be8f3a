//! Ciclismo statistics
//!
//! Descriptive statistics over the historical winners of a multi-edition
//! cycling race: distinct winners, distances, teams, nationality breakdowns
//! and the fastest edition.

pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod summary;
pub mod telemetry;

pub use crate::config::{AppConfig, LoggingConfig, SummaryConfig};
pub use crate::error::StatsError;
pub use crate::model::Winner;
pub use crate::stats::RaceStatistics;
pub use crate::summary::{RaceSummary, TeamStages};
pub use crate::telemetry::init_tracing;
