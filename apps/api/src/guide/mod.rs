// Conversational safety and topic routing for the faith companion.
// Classification and prompt composition are pure; the only I/O is the model
// call in orchestrator, which goes through llm_client::ModelInvoker.

pub mod citations;
pub mod composer;
pub mod crisis;
pub mod handlers;
pub mod mood;
pub mod orchestrator;
pub mod prompts;
pub mod text;
pub mod topics;
