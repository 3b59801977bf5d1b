// Generation pipeline: one completion call per request, reply post-processing,
// provenance and the HTTP handlers on top.
// All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod reply;
