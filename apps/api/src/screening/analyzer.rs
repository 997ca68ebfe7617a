//! Analyzer: prompt → single LLM completion → JSON recovery → verdict.
//!
//! Never fails: provider errors and unusable replies both come back as
//! `AnalysisResult::Failure`, which the handler returns with a 200.

use tracing::{debug, error, info, warn};

use crate::llm_client::CompletionProvider;
use crate::screening::models::{AnalysisResult, JobContext};
use crate::screening::prompts::build_screening_prompt;
use crate::screening::recovery::recover_json_object;

pub async fn analyze_resume(
    resume_text: &str,
    job: &JobContext,
    llm: &dyn CompletionProvider,
) -> AnalysisResult {
    let prompt = build_screening_prompt(resume_text, job);

    let reply = match llm.complete(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("LLM API error: {e}");
            return AnalysisResult::failure(e.to_string());
        }
    };
    debug!("LLM response: {reply}");

    let result = interpret_reply(reply.trim());
    if let AnalysisResult::Verdict(verdict) = &result {
        info!(match_score = %verdict.match_score, "resume scored");
    }
    result
}

/// Recovers the JSON object from a raw reply and shapes it into a result.
pub fn interpret_reply(reply: &str) -> AnalysisResult {
    match recover_json_object(reply) {
        Ok(object) => {
            let result = AnalysisResult::from_object(&object);
            if matches!(result, AnalysisResult::Failure { .. }) {
                warn!("model reply lacks verdict keys: {:?}", object.keys().collect::<Vec<_>>());
            }
            result
        }
        Err(e) => {
            error!("JSON parsing error: {e}");
            e.into()
        }
    }
}
