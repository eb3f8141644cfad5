//! Introductory exercises from the bridging course: the Day 3 menu
//! calculator plus the smaller Day 1 to Day 3 lessons.

pub mod error;
pub mod input;
pub mod lessons;
pub mod menu;

pub use error::{MenuError, Result};
pub use input::{InputSource, TokenReader};
pub use lessons::Lesson;
pub use menu::{Calculator, OnInvalidInput, SessionStats};
