//! One full evaluation cycle: request in, display-ready output out.

use crate::charts::{ChartPayload, build_charts};
use crate::error::AppResult;
use crate::form::{EvaluationRequest, FormState};
use crate::report::Report;
use serde::{Deserialize, Serialize};
use vm_engine::VolumetricResult;

/// Everything a frontend needs to display one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub request: EvaluationRequest,
    pub result: VolumetricResult,
    pub report: Report,
    pub charts: Vec<ChartPayload>,
}

/// Run the engine on an explicit request and build report and charts.
pub fn evaluate(request: &EvaluationRequest) -> AppResult<Evaluation> {
    let result = vm_engine::evaluate(&request.inputs, request.fluid, request.recovery)?;
    let report = Report::from_result(&result);
    let charts = build_charts(&result);

    tracing::trace!(charts = charts.len(), lines = report.lines.len(), "evaluation built");

    Ok(Evaluation {
        request: *request,
        result,
        report,
        charts,
    })
}

/// Clamp the form, then evaluate it.
pub fn evaluate_form(form: &FormState) -> AppResult<Evaluation> {
    evaluate(&form.to_request())
}

/// Pretty JSON for machine consumption.
pub fn to_json(evaluation: &Evaluation) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(evaluation)?)
}
