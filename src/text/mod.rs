//! Text preprocessing: normalization, segmentation and keyword extraction

pub mod keywords;
pub mod normalize;
pub mod segment;

pub use keywords::{extract_keywords, is_stopword, keywords_overlap};
pub use normalize::{is_cjk_ideograph, normalize};
pub use segment::segment;
