// Resume screening pipeline.
// upload → extraction (worker pool) → prompt → LLM → JSON recovery → verdict.
// All LLM calls go through llm_client; nothing here calls the provider directly.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod recovery;
