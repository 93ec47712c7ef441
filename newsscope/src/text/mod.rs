//! Pure text primitives: normalization, keyword ranking and the extractive
//! TextRank summarizer. Everything here is total, with no model access or I/O.

pub mod keywords;
pub mod normalize;
pub mod stopwords;
pub mod textrank;

pub use keywords::keywords;
pub use normalize::normalize;
