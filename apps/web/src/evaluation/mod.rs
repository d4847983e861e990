// Thesis evaluation: file encoding, the model-backed evaluator, the reply
// model and the helpers the Result screen needs (filtering, report export).
// All model calls go through llm_client — no direct Gemini calls here.

pub mod consistency;
pub mod encoder;
pub mod evaluator;
pub mod export;
pub mod filter;
pub mod models;
pub mod prompts;
