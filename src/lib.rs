//! Maturity Assessment - Operational maturity questionnaire analysis
//!
//! This crate turns structured questionnaire answers about a company's
//! operations into per-axis maturity scores, estimated time and cost
//! losses, a savings projection, a risk register, recommendations and a
//! prioritized improvement backlog.
//!
//! The analysis engine in [`domain::analysis`] is pure and synchronous.
//! Persistence sits behind the [`ports::AssessmentRepository`] port and is
//! orchestrated by the handlers in [`application`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
