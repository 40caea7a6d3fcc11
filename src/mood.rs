//! # Mood Categories
//!
//! The closed set of six moods Moodify understands, together with the static
//! metadata attached to each one: display label, short description, emoji and
//! the canonical catalog search query used to build a playlist.
//!
//! Declaration order matters. It is the order used by the literal fallback
//! and by the classifier to break score ties:
//! `happy, sad, energetic, chill, angry, romantic`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six moods a playlist can be selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Sad,
    Energetic,
    Chill,
    Angry,
    Romantic,
}

impl MoodCategory {
    /// All moods in declaration order.
    pub const ALL: [MoodCategory; 6] = [
        MoodCategory::Happy,
        MoodCategory::Sad,
        MoodCategory::Energetic,
        MoodCategory::Chill,
        MoodCategory::Angry,
        MoodCategory::Romantic,
    ];

    /// Lowercase canonical name, e.g. `"happy"`.
    ///
    /// This is the string the literal fallback looks for in user input.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Sad => "sad",
            MoodCategory::Energetic => "energetic",
            MoodCategory::Chill => "chill",
            MoodCategory::Angry => "angry",
            MoodCategory::Romantic => "romantic",
        }
    }

    /// Capitalised display label, e.g. `"Happy"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Sad => "Sad",
            MoodCategory::Energetic => "Energetic",
            MoodCategory::Chill => "Chill",
            MoodCategory::Angry => "Angry",
            MoodCategory::Romantic => "Romantic",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            MoodCategory::Happy => "Upbeat and joyful music",
            MoodCategory::Sad => "Emotional and melancholic songs",
            MoodCategory::Energetic => "High-energy workout music",
            MoodCategory::Chill => "Relaxing and calm vibes",
            MoodCategory::Angry => "Intense and aggressive beats",
            MoodCategory::Romantic => "Love songs and romantic ballads",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            MoodCategory::Happy => "😊",
            MoodCategory::Sad => "😢",
            MoodCategory::Energetic => "⚡",
            MoodCategory::Chill => "😌",
            MoodCategory::Angry => "😤",
            MoodCategory::Romantic => "💕",
        }
    }

    /// Fixed catalog query for this mood.
    ///
    /// Stable across calls so that providers can cache on the query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodify::mood::MoodCategory;
    ///
    /// assert_eq!(
    ///     MoodCategory::Happy.search_query(),
    ///     "happy upbeat pop music feel good songs 2024"
    /// );
    /// ```
    #[must_use]
    pub const fn search_query(self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy upbeat pop music feel good songs 2024",
            MoodCategory::Sad => "sad emotional ballad music heartbreak songs",
            MoodCategory::Energetic => "energetic workout pump up music high energy 2024",
            MoodCategory::Chill => "chill lo-fi relaxing music ambient calm vibes",
            MoodCategory::Angry => "rock metal aggressive music angry songs heavy",
            MoodCategory::Romantic => "romantic love songs R&B soul music intimate",
        }
    }

    /// Position in declaration order, used for deterministic tie-breaking.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no mood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}' (expected one of: happy, sad, energetic, chill, angry, romantic)")]
pub struct UnknownMood(pub String);

impl FromStr for MoodCategory {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MoodCategory::ALL
            .into_iter()
            .find(|mood| mood.name() == wanted)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}
