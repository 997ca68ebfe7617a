// Prompt text for resume screening.

use crate::screening::models::JobContext;

/// Fixed instructions preceding the inputs. The model is held to objective
/// alignment, explicit shortcomings, and relevance filtering.
const SCREENING_GUIDELINES: &str = r#"You are an AI performing resume screening in a professional HR setting.

Please follow these guidelines strictly:

1. **Match Score**: Provide a match score between 0 and 100. This score should reflect how well the qualifications listed in the resume align with the job description, specifications, and requirements.
   - Base the score solely on the match between the resume and the job's core requirements.

2. **Strengths**: List key strengths and relevant experience that align with the job description and requirements.
   - Provide strengths as bullet points.
   - Focus on specific skills and experience directly related to the job specifications and requirements.

3. **Gaps/Weaknesses**: List any weaknesses or missing skills/experience in relation to the job specifications and requirements.
   - State explicitly what is lacking (missing skills, qualifications, or experience).
   - Never list something as merely "missing"; frame it as a **shortcoming** or **weakness**. For example:
     - "Missing experience with [Technology], which is required for this role."
     - "Lacks proficiency in [Skill], which is a key requirement."

4. **Exclusion of Irrelevant Information**: Ignore any details of the resume that are not directly related to the job description, specifications, or requirements.
   - Do not mention personal traits, preferences, or irrelevant experiences.

The evaluation must be **objective, factual** and **professional**. Base it only on the **objective match** between the resume and the job context."#;

/// Output contract. Downstream recovery tolerates prose around the object.
const OUTPUT_CONTRACT: &str = r#"Return **ONLY JSON** in this exact format:
{
    "match_score": <numeric_score_out_of_100>,
    "strengths": "<brief summary in bullet points>",
    "gaps": "<brief weaknesses in bullet points>"
}"#;

/// Renders the screening prompt.
///
/// Inputs are interpolated in a single pass, so user text that happens to look
/// like a placeholder is never substituted a second time.
pub fn build_screening_prompt(resume_text: &str, job: &JobContext) -> String {
    format!(
        "{SCREENING_GUIDELINES}

Evaluate the qualifications and experience based on the following:

--- INPUT ---
**Resume:**
{resume_text}

**Job Description:**
{description}

**Specifications:**
{specifications}

**Requirements:**
{requirements}

{OUTPUT_CONTRACT}
",
        description = job.description,
        specifications = job.specifications,
        requirements = job.requirements,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobContext {
        JobContext {
            description: "Backend engineer on the payments team".to_string(),
            specifications: "Rust, PostgreSQL, Kafka".to_string(),
            requirements: "5+ years backend experience".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_all_inputs_in_order() {
        let prompt = build_screening_prompt("Experience: 5 years Python", &job());

        let resume = prompt.find("Experience: 5 years Python").unwrap();
        let description = prompt.find("Backend engineer on the payments team").unwrap();
        let specs = prompt.find("Rust, PostgreSQL, Kafka").unwrap();
        let reqs = prompt.find("5+ years backend experience").unwrap();
        assert!(resume < description && description < specs && specs < reqs);
    }

    #[test]
    fn test_prompt_states_output_contract() {
        let prompt = build_screening_prompt("resume", &job());
        for key in ["\"match_score\"", "\"strengths\"", "\"gaps\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.contains("between 0 and 100"));
        assert!(prompt.contains("Return **ONLY JSON**"));
    }

    #[test]
    fn test_prompt_requires_shortcoming_framing_and_relevance() {
        let prompt = build_screening_prompt("resume", &job());
        assert!(prompt.contains("shortcoming"));
        assert!(prompt.contains("Exclusion of Irrelevant Information"));
        assert!(prompt.contains("objective"));
    }

    #[test]
    fn test_placeholder_like_input_is_left_verbatim() {
        let job = JobContext {
            description: "{requirements}".to_string(),
            specifications: String::new(),
            requirements: "real requirements".to_string(),
        };
        let prompt = build_screening_prompt("{description}", &job);
        assert!(prompt.contains("**Resume:**\n{description}\n"));
        assert!(prompt.contains("**Job Description:**\n{requirements}\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_screening_prompt("resume", &job()),
            build_screening_prompt("resume", &job())
        );
    }
}
