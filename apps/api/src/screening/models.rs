use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::screening::recovery::{RecoveryError, PARSE_FAILURE_MESSAGE};

/// In-band error text for a recovered object that lacks the verdict keys.
pub const INCOMPLETE_VERDICT_MESSAGE: &str =
    "Model response did not contain match_score, strengths and gaps.";

/// Job-side inputs of a screening request. No structure or length is imposed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobContext {
    pub description: String,
    pub specifications: String,
    pub requirements: String,
}

/// The uploaded document. Dropped as soon as its text has been extracted.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: Option<String>,
    pub bytes: Bytes,
}

/// A validated multipart form: one upload plus the job context.
#[derive(Debug, Clone)]
pub struct ResumeSubmission {
    pub upload: Upload,
    pub job: JobContext,
}

/// Successful screening verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchVerdict {
    /// 0–100. The model's own number is kept when it is already in range.
    pub match_score: Number,
    pub strengths: String,
    pub gaps: String,
}

/// What the resume endpoint returns with a 200: exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Verdict(MatchVerdict),
    Failure { error: String },
}

impl AnalysisResult {
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            error: message.into(),
        }
    }

    /// Converts a recovered model object into a verdict, or an in-band failure
    /// when the verdict keys are absent or of the wrong type.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        match MatchVerdict::from_object(object) {
            Some(verdict) => AnalysisResult::Verdict(verdict),
            None => AnalysisResult::failure(INCOMPLETE_VERDICT_MESSAGE),
        }
    }
}

impl From<RecoveryError> for AnalysisResult {
    fn from(_: RecoveryError) -> Self {
        AnalysisResult::failure(PARSE_FAILURE_MESSAGE)
    }
}

impl MatchVerdict {
    pub fn from_object(object: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            match_score: score_from_value(object.get("match_score")?)?,
            strengths: summary_from_value(object.get("strengths")?)?,
            gaps: summary_from_value(object.get("gaps")?)?,
        })
    }
}

/// Accepts a JSON number or a numeric string; out-of-range scores are clamped.
fn score_from_value(value: &Value) -> Option<Number> {
    let number = match value {
        Value::Number(n) => n.clone(),
        Value::String(s) => s.trim().parse::<Number>().ok()?,
        _ => return None,
    };
    let score = number.as_f64().filter(|s| s.is_finite())?;
    if (0.0..=100.0).contains(&score) {
        Some(number)
    } else if score < 0.0 {
        Some(Number::from(0))
    } else {
        Some(Number::from(100))
    }
}

/// Models asked for "bullet points" sometimes answer with an array.
fn summary_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => None,
    }
}
