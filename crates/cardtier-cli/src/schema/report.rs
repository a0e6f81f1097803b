use cardtier_catalog::Language;
use cardtier_evaluator::{ranking::RankedCard, tier::TierCutPoints};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Document written by `export`.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub language: Language,
    pub scoring_model: Option<&'a str>,
    pub cut_points: TierCutPoints,
    pub cards: Vec<ReportCard<'a>>,
}

/// A ranked card with its presentation fields resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ReportCard<'a> {
    #[serde(flatten)]
    pub ranked: &'a RankedCard,
    pub tribe_name: Option<&'a str>,
    pub set_name: Option<&'a str>,
    pub image_url: String,
}
