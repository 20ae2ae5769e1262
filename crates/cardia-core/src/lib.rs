//! cardia-core
//!
//! Pure domain types for cardiac risk estimation: lab observations, the
//! patient record and its related factors, and calendar age. No scoring
//! logic lives here. This is the shared vocabulary of the Cardia system.

pub mod age;
pub mod error;
pub mod models;
