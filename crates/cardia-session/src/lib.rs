//! cardia-session library root.
//!
//! The in-process boundary a UI shell talks to: deployment config, a
//! `Session` holding one patient, and the report and display strings
//! rebuilt after every edit.

pub mod config;
pub mod error;
pub mod presentation;
pub mod report;
pub mod session;
