//! Axum route handler for resume screening.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::{AppError, FieldError};
use crate::screening::analyzer::analyze_resume;
use crate::screening::models::{AnalysisResult, JobContext, ResumeSubmission, Upload};
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const DESCRIPTION_FIELD: &str = "job_description";
const SPECS_FIELD: &str = "specs";
const REQS_FIELD: &str = "reqs";

/// POST /process_resume/
///
/// Multipart form: `file`, `job_description`, `specs`, `reqs` (all required).
/// Returns 200 with either a verdict or an in-band `{error}`; 422 when the form
/// is incomplete; 500 when the document cannot be read.
pub async fn handle_process_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let multipart = multipart
        .map_err(|e| AppError::Validation(vec![FieldError::malformed_body(e.body_text())]))?;
    let submission = read_submission(multipart, state.config.max_upload_bytes).await?;

    let span = info_span!(
        "process_resume",
        request_id = %Uuid::new_v4(),
        filename = submission.upload.filename.as_deref().unwrap_or("<unnamed>"),
    );
    let result = screen_submission(&state, submission).instrument(span).await?;
    Ok(Json(result))
}

/// extracting → analyzing. Extraction failure ends the request before any LLM call.
async fn screen_submission(
    state: &AppState,
    submission: ResumeSubmission,
) -> Result<AnalysisResult, AppError> {
    let ResumeSubmission { upload, job } = submission;

    info!(bytes = upload.bytes.len(), "extracting resume text");
    let resume_text = state.extraction.extract(upload.bytes).await?;
    info!(chars = resume_text.len(), "resume text extracted");

    Ok(analyze_resume(&resume_text, &job, state.llm.as_ref()).await)
}

/// Field values collected while streaming the form. A repeated field keeps
/// its last value; unknown fields are skipped.
#[derive(Default)]
struct FormFields {
    upload: Option<Upload>,
    description: Option<String>,
    specifications: Option<String>,
    requirements: Option<String>,
    errors: Vec<FieldError>,
}

impl FormFields {
    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            DESCRIPTION_FIELD => Some(&mut self.description),
            SPECS_FIELD => Some(&mut self.specifications),
            REQS_FIELD => Some(&mut self.requirements),
            _ => None,
        }
    }

    fn set_text(&mut self, name: &str, raw: Vec<u8>) {
        self.errors.retain(|e| e.loc.last().map(String::as_str) != Some(name));
        let value = match String::from_utf8(raw) {
            Ok(text) => Some(text),
            Err(_) => {
                self.errors.push(FieldError::not_a_string(name));
                None
            }
        };
        if let Some(slot) = self.slot(name) {
            *slot = value;
        }
    }

    fn has_error(&self, name: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.loc.last().map(String::as_str) == Some(name))
    }

    fn finish(mut self) -> Result<ResumeSubmission, AppError> {
        let mut errors = Vec::new();
        if self.upload.is_none() {
            errors.push(FieldError::missing(FILE_FIELD));
        }
        for name in [DESCRIPTION_FIELD, SPECS_FIELD, REQS_FIELD] {
            let present = self.slot(name).is_some_and(|slot| slot.is_some());
            if !present && !self.has_error(name) {
                errors.push(FieldError::missing(name));
            }
        }
        errors.append(&mut self.errors);

        match self {
            FormFields {
                upload: Some(upload),
                description: Some(description),
                specifications: Some(specifications),
                requirements: Some(requirements),
                ..
            } if errors.is_empty() => Ok(ResumeSubmission {
                upload,
                job: JobContext {
                    description,
                    specifications,
                    requirements,
                },
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Reads and validates the whole form before any pipeline work starts.
async fn read_submission(
    mut multipart: Multipart,
    upload_limit: usize,
) -> Result<ResumeSubmission, AppError> {
    let mut fields = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, upload_limit))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            FILE_FIELD => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, upload_limit))?;
                fields.upload = Some(Upload { filename, bytes });
            }
            DESCRIPTION_FIELD | SPECS_FIELD | REQS_FIELD => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, upload_limit))?;
                fields.set_text(&name, bytes.to_vec());
            }
            _ => {}
        }
    }

    fields.finish()
}

fn multipart_error(e: MultipartError, upload_limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(upload_limit)
    } else {
        AppError::Validation(vec![FieldError::malformed_body(e.body_text())])
    }
}
