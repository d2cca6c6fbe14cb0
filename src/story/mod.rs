//! Story chapters and the score-gated unlock predicate.

pub mod chapter;
pub mod unlock;

pub use chapter::{StoryChapter, StoryLibrary};
pub use unlock::is_unlocked;
