//! Job recommender library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, RecommenderError};
pub use config::Config;
pub use processing::engine::RecommendationEngine;
pub use processing::ranker::{RankingResult, RankingSettings, ScoredOffer, Summary};
