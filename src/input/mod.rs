//! Input processing module
//! Handles upload gating, document loading, and text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{InputManager, RawDocument};
pub use text_extractor::{PdfExtractor, TextExtractor};
