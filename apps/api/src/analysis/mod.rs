// Résumé analysis: prompt construction, the generation call, reply parsing,
// the render view and the downloadable report.
// All generation calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod prompts;
pub mod report;
pub mod request;
pub mod response;
pub mod result;
pub mod service;
