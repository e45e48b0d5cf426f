//! Shared presentation layer for the volumetrics frontends.
//!
//! This crate sits between the engine and the CLI/GUI: it owns the form
//! ranges, turns raw form values into an explicit evaluation request, and
//! formats the engine result as report lines and chart payloads that either
//! frontend can draw.

pub mod charts;
pub mod error;
pub mod form;
pub mod format;
pub mod limits;
pub mod report;
pub mod service;

pub use charts::{Bar, BarChart, ChartId, ChartPayload, PieChart, PieSlice, Rgb};
pub use error::{AppError, AppResult};
pub use form::{EvaluationRequest, FormState};
pub use limits::{InputLimits, InputRange};
pub use report::Report;
pub use service::{Evaluation, evaluate, evaluate_form, to_json};
