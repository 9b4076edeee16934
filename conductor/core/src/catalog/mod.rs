//! Content Catalog
//!
//! The compiled-in quiz content: the ordered question list and one profile
//! per category. Everything here is static and read-only for the lifetime
//! of the process.
//!
//! # Category-indexed lookups
//!
//! Categories form a closed set, so profiles and tallies live in fixed-size
//! arrays indexed by [`Category::index`]. A lookup can never miss a key; the
//! only thing left to check at runtime is that the authored content is
//! consistent, which [`Catalog::validate`] does once at startup.

mod profiles;
mod questions;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::LATE_STAGE_THRESHOLD;

/// Minimum number of options a question may offer
pub const MIN_OPTIONS: usize = 2;

/// Maximum number of options a question may offer
pub const MAX_OPTIONS: usize = 4;

/// Result categories, in declaration order
///
/// Declaration order is also the final tie-break order used by
/// [`crate::scoring::winning_category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Word Wizard
    A,
    /// Visual Alchemist
    B,
    /// Automation Engineer
    C,
    /// Deep Seeker
    D,
    /// Trend Bard
    E,
    /// Mental Healer
    F,
    /// Grand Sage
    G,
}

impl Category {
    /// Number of categories
    pub const COUNT: usize = 7;

    /// All categories in declaration order
    pub const ALL: [Category; Self::COUNT] = [
        Category::A,
        Category::B,
        Category::C,
        Category::D,
        Category::E,
        Category::F,
        Category::G,
    ];

    /// Array slot for this category
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::F => 5,
            Self::G => 6,
        }
    }

    /// Stable single-letter identifier (used in export file names)
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One selectable answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOption {
    /// Display label
    pub label: &'static str,
    /// Category this answer scores for
    pub category: Category,
}

/// A single quiz question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    /// 1-based position (display, and the late-stage threshold comparison)
    pub ordinal: u8,
    /// Prompt text
    pub prompt: &'static str,
    /// Ordered answers (2-4)
    pub options: &'static [QuizOption],
}

impl Question {
    /// Whether answers to this question also count toward the late-stage tally
    #[must_use]
    pub fn is_late_stage(&self) -> bool {
        self.ordinal >= LATE_STAGE_THRESHOLD
    }

    /// Option at `index`, if any
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&'static QuizOption> {
        self.options.get(index)
    }
}

/// An sRGB colour triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Presentation-only colour descriptors for a profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Accent colour for headings and the skill line
    pub accent: Rgb,
    /// Cover gradient start
    pub gradient_from: Rgb,
    /// Cover gradient end
    pub gradient_to: Rgb,
}

/// A pre-authored result profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Which category this profile describes
    pub category: Category,
    /// Display name
    pub name: &'static str,
    /// Short alias (shown above the name)
    pub alias: &'static str,
    /// Colour descriptors
    pub theme: Theme,
    /// Unique skill line
    pub skill: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Heading for the trait section
    pub features_title: &'static str,
    /// Trait description
    pub features: &'static str,
    /// Why this category suits the user
    pub reason: &'static str,
    /// Monetization suggestion
    pub monetization: &'static str,
}

/// Content-integrity defects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No questions at all
    #[error("catalog has no questions")]
    Empty,

    /// Ordinals must run 1..=n in order
    #[error("question at position {position} has ordinal {found}, expected {expected}")]
    OrdinalOutOfSequence {
        /// 0-based position in the question list
        position: usize,
        /// Ordinal found
        found: u8,
        /// Ordinal expected
        expected: usize,
    },

    /// Too few or too many options
    #[error("question {ordinal} has {count} options (allowed {MIN_OPTIONS}-{MAX_OPTIONS})")]
    OptionCount {
        /// Offending question
        ordinal: u8,
        /// Number of options found
        count: usize,
    },

    /// A profile sits in another category's slot
    #[error("profile slot {slot} holds profile for category {found}")]
    ProfileMismatch {
        /// Category whose slot was checked
        slot: Category,
        /// Category the profile actually describes
        found: Category,
    },

    /// An option references a category without a profile
    #[error("question {ordinal} references category {category} with no profile")]
    MissingProfile {
        /// Offending question
        ordinal: u8,
        /// Unresolved category
        category: Category,
    },
}

/// The question list plus the profile table
#[derive(Debug)]
pub struct Catalog {
    questions: &'static [Question],
    profiles: &'static [CategoryProfile; Category::COUNT],
}

static BUILTIN: Catalog = Catalog {
    questions: &questions::QUESTIONS,
    profiles: &profiles::PROFILES,
};

impl Catalog {
    /// Assemble a catalog from static content
    #[must_use]
    pub const fn new(
        questions: &'static [Question],
        profiles: &'static [CategoryProfile; Category::COUNT],
    ) -> Self {
        Self {
            questions,
            profiles,
        }
    }

    /// The compiled-in content
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All questions, in order
    #[must_use]
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Question at 0-based `index`
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    /// Number of questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog has no questions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions that feed the late-stage tally
    #[must_use]
    pub fn late_stage_len(&self) -> usize {
        self.questions.iter().filter(|q| q.is_late_stage()).count()
    }

    /// Profile for `category`
    #[must_use]
    pub fn profile(&self, category: Category) -> &'static CategoryProfile {
        &self.profiles[category.index()]
    }

    /// Check content integrity
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        for category in Category::ALL {
            let found = self.profiles[category.index()].category;
            if found != category {
                return Err(CatalogError::ProfileMismatch {
                    slot: category,
                    found,
                });
            }
        }

        for (position, question) in self.questions.iter().enumerate() {
            let expected = position + 1;
            if usize::from(question.ordinal) != expected {
                return Err(CatalogError::OrdinalOutOfSequence {
                    position,
                    found: question.ordinal,
                    expected,
                });
            }

            let count = question.options.len();
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                return Err(CatalogError::OptionCount {
                    ordinal: question.ordinal,
                    count,
                });
            }

            for option in question.options {
                if self.profile(option.category).category != option.category {
                    return Err(CatalogError::MissingProfile {
                        ordinal: question.ordinal,
                        category: option.category,
                    });
                }
            }
        }

        Ok(())
    }
}
