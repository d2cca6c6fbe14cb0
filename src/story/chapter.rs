//! Story chapter reference data.
//!
//! Chapters are read-only narrative content about how space weather hits
//! people on the ground. Access is gated purely by score through
//! `unlock::is_unlocked`; the library holds no unlock state of its own.

use serde::{Deserialize, Serialize};

/// A single story chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChapter {
    /// Ordinal id, starting at 1.
    pub id: u32,

    /// Chapter title.
    pub title: String,

    /// Minimum cumulative score required to read this chapter.
    pub unlock_score: u32,

    /// One-line teaser shown on the chapter card.
    pub description: String,

    /// Narrative text.
    pub content: String,

    /// The takeaway shown after reading.
    pub lesson: String,
}

impl StoryChapter {
    /// Create a chapter with empty narrative fields.
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>, unlock_score: u32) -> Self {
        Self {
            id,
            title: title.into(),
            unlock_score,
            description: String::new(),
            content: String::new(),
            lesson: String::new(),
        }
    }

    /// Set the teaser text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the narrative text (builder pattern).
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the lesson text (builder pattern).
    #[must_use]
    pub fn with_lesson(mut self, lesson: impl Into<String>) -> Self {
        self.lesson = lesson.into();
        self
    }
}

/// Ordered collection of story chapters.
#[derive(Clone, Debug, Default)]
pub struct StoryLibrary {
    chapters: Vec<StoryChapter>,
}

impl StoryLibrary {
    /// Create a library from a chapter list.
    #[must_use]
    pub fn new(chapters: Vec<StoryChapter>) -> Self {
        Self { chapters }
    }

    /// The four stock chapters, unlocking at 0 / 150 / 300 / 500 points.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            StoryChapter::new(1, "The Farmer's Dilemma", 0)
                .with_description(
                    "Meet Sarah, a farmer whose GPS-guided tractors suddenly lose signal \
                     during harvest season.",
                )
                .with_content(
                    "Sarah had farmed for 20 years, but nothing prepared her for that \
                     morning: her GPS-guided tractors veered off course, the irrigation \
                     system stopped responding, and the weather sensors went dark. Then \
                     her phone lit up - \"M-Class Solar Flare Detected.\" Space weather \
                     wasn't just a problem for astronauts anymore; without quick action, \
                     her whole harvest season was at risk.",
                )
                .with_lesson(
                    "Solar flares can disrupt GPS signals, affecting precision \
                     agriculture and modern farming techniques.",
                ),
            StoryChapter::new(2, "Pilot in the Aurora", 150)
                .with_description(
                    "Captain James faces communication blackouts while flying over the \
                     polar route.",
                )
                .with_content(
                    "Captain James had flown the polar route hundreds of times, but as \
                     his aircraft crossed 70 degrees North the radio went silent and the \
                     GPS started showing impossible locations. Through the cockpit \
                     window the aurora danced more violently than he had ever seen. His \
                     training kicked in: solar flare protocols, backup navigation, \
                     manual course, emergency frequency. Every second counted flying \
                     blind over the Arctic.",
                )
                .with_lesson(
                    "Polar routes are especially vulnerable to space weather due to \
                     Earth's magnetic field geometry, causing radio blackouts and \
                     navigation errors.",
                ),
            StoryChapter::new(3, "The Grid Manager's Nightmare", 300)
                .with_description(
                    "Emily must balance the power grid as geomagnetic currents threaten \
                     a cascading failure.",
                )
                .with_content(
                    "Emily's screen lit up red: transformers across the northern grid \
                     were overheating as geomagnetically induced currents flowed through \
                     the lines like an invisible enemy. Too much load on any sector and \
                     the entire region could go dark - hospitals, homes, millions of \
                     people. \"Redirect power from sectors 3 and 7. Activate backups in \
                     the north. We're fighting the Sun itself today.\"",
                )
                .with_lesson(
                    "Geomagnetically induced currents from solar storms can damage \
                     transformers and cause widespread power outages.",
                ),
            StoryChapter::new(4, "Astronaut's Alert", 500)
                .with_description(
                    "Commander Chen must protect the ISS crew from deadly solar \
                     radiation.",
                )
                .with_content(
                    "\"Solar flare, X-class. All crew to the shelter module. Now!\" On \
                     the International Space Station there is no atmosphere between you \
                     and the Sun; an X-class flare means lethal doses are minutes away. \
                     The crew packed into the most shielded section, surrounded by water \
                     tanks, and waited for the worst to pass while a storm of \
                     high-energy particles raged outside the window.",
                )
                .with_lesson(
                    "Space radiation from solar flares is a major hazard for astronauts \
                     and can cause both immediate and long-term health effects.",
                ),
        ])
    }

    /// All chapters in order.
    #[must_use]
    pub fn chapters(&self) -> &[StoryChapter] {
        &self.chapters
    }

    /// Look up a chapter by ordinal id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&StoryChapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Chapters readable at the given score. Evaluated fresh per call.
    pub fn unlocked(&self, score: u32) -> impl Iterator<Item = &StoryChapter> {
        self.chapters
            .iter()
            .filter(move |c| super::unlock::is_unlocked(c, score))
    }

    /// Number of chapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
