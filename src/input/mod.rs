//! Input processing module
//! Handles resume text extraction and loading of job offers and reference corpora

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod jobs;
pub mod corpus;
