pub mod pooled_cohort;
pub mod reynolds;
