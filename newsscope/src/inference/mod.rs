mod api;
mod provider;

pub use api::{ClassScore, EntitySpan, InferenceApiClient, TaskParameters};
pub use provider::InferenceProvider;
