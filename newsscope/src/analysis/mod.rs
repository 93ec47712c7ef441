//! Article analysis stages and their orchestration. Every model-backed
//! stage carries a local fallback, so analysis always produces a record.

pub mod classifier;
pub mod entities;
pub mod graph;
pub mod lexicon;
pub mod pipeline;
pub mod sentiment;
pub mod summarizer;

pub use classifier::TitleClassifier;
pub use entities::EntityExtractor;
pub use graph::ContentGraphBuilder;
pub use pipeline::AnalysisPipeline;
pub use sentiment::SentimentScorer;
pub use summarizer::ModelBackedSummarizer;
