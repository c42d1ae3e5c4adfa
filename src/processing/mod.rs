//! Text processing, screening, skill matching and scoring

pub mod vocabulary;
pub mod text_processor;
pub mod validator;
pub mod skill_matcher;
pub mod scorer;
pub mod tfidf;
pub mod regressor;
pub mod pipeline;
