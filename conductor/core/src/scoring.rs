//! Scoring Engine
//!
//! Two tallies run side by side for the whole session:
//!
//! - `total` counts every answer.
//! - `late` counts only answers to questions at or past
//!   [`LATE_STAGE_THRESHOLD`] and is used to break ties in `total`.
//!
//! The winner is ranked by `total`, then `late`, then category declaration
//! order. The last key is explicit so identical answer sequences always
//! produce the same result.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Question, QuizOption};

/// First ordinal whose answers also count toward the late-stage tally
pub const LATE_STAGE_THRESHOLD: u8 = 14;

/// Per-category answer counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally([u32; Category::COUNT]);

impl ScoreTally {
    /// All-zero tally
    #[must_use]
    pub const fn new() -> Self {
        Self([0; Category::COUNT])
    }

    /// Count for `category`
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    /// Add one to `category`
    pub fn increment(&mut self, category: Category) {
        self.0[category.index()] += 1;
    }

    /// Sum over all categories
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Whether every count is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// `(category, count)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl FromIterator<(Category, u32)> for ScoreTally {
    fn from_iter<I: IntoIterator<Item = (Category, u32)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (category, count) in iter {
            tally.0[category.index()] = count;
        }
        tally
    }
}

/// The two tallies of a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Every answer
    pub total: ScoreTally,
    /// Answers to late-stage questions only
    pub late: ScoreTally,
}

impl Scoreboard {
    /// Empty scoreboard
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: ScoreTally::new(),
            late: ScoreTally::new(),
        }
    }

    /// Record `option` as the answer to `question`
    pub fn record_answer(&mut self, question: &Question, option: &QuizOption) {
        self.total.increment(option.category);
        if question.is_late_stage() {
            self.late.increment(option.category);
        }
    }

    /// Winner for the current tallies
    #[must_use]
    pub fn winner(&self) -> Category {
        winning_category(&self.total, &self.late)
    }
}

/// Pick the single winning category
///
/// Ranks by `total` descending, then `late` descending, then declaration
/// order (A first). Never reports a tie.
#[must_use]
pub fn winning_category(total: &ScoreTally, late: &ScoreTally) -> Category {
    let mut ranked = Category::ALL;
    ranked.sort_by_key(|&c| (Reverse(total.get(c)), Reverse(late.get(c)), c.index()));
    ranked[0]
}
