pub(crate) mod report;
pub(crate) mod scoring_model;
