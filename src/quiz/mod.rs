//! # Query & Selection Logic
//!
//! Pure transformations over result sets fetched from the store:
//! pagination slicing, substring search, and the quiz's random
//! non-repeating question selection. Nothing here touches the store or
//! the HTTP layer.

pub mod paginate;
pub mod search;
pub mod selection;

pub use paginate::{page_count, paginate, QUESTIONS_PER_PAGE};
pub use search::filter_questions;
pub use selection::{candidates, draw};
