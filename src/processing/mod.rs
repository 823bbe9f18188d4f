//! Text similarity ranking engine

pub mod normalizer;
pub mod vocabulary;
pub mod vectorizer;
pub mod similarity;
pub mod ranker;
pub mod document;
pub mod skills;
pub mod engine;
