// Site prompt generation: validates a request, composes the prompt pair and
// makes the single provider call. All provider access goes through llm_client.

pub mod generator;
pub mod handlers;
