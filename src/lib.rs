pub mod align;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod pipelines;
pub mod report;
pub mod sentence;
pub mod xml;
