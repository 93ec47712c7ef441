mod analysis;
mod article;
mod graph;

pub use analysis::*;
pub use article::*;
pub use graph::*;
