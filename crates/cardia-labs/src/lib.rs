//! cardia-labs
//!
//! Turns raw, time-stamped lab observations into normalized values on the
//! patient record. The selector picks the most recent clinically valid
//! observation; the extractors supply the per-lab unit rules.

pub mod extract;
pub mod selector;
