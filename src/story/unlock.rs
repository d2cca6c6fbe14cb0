//! The unlock gate: a stateless predicate over score.
//!
//! Called fresh on every chapter-list render or access check. It holds no
//! cached result, so it always reflects the latest score, including right
//! after a round reset.

use super::chapter::StoryChapter;

/// A chapter is accessible iff the score meets its unlock threshold.
///
/// Pure and monotone in score: raising the score never locks a
/// previously-unlocked chapter.
#[must_use]
pub fn is_unlocked(chapter: &StoryChapter, score: u32) -> bool {
    score >= chapter.unlock_score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let chapter = StoryChapter::new(3, "Grid", 300);

        assert!(!is_unlocked(&chapter, 299));
        assert!(is_unlocked(&chapter, 300));
        assert!(is_unlocked(&chapter, 301));
    }

    #[test]
    fn test_zero_threshold_always_open() {
        let chapter = StoryChapter::new(1, "Farmer", 0);
        assert!(is_unlocked(&chapter, 0));
    }
}
