mod provider;

pub use provider::EmbeddingProvider;
