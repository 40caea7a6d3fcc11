//! # Keyword Rule Tables
//!
//! A keyword rule is a `(mood, phrase, weight)` triple. The classifier adds a
//! rule's weight to its mood whenever the phrase occurs anywhere in the
//! lowercased input, so phrases may span several words ("feel good") and may
//! match inside longer words.
//!
//! Two hand-authored tables ship with the crate:
//!
//! - [`RuleTable::weighted`] - the main search table, weights 5 to 10
//! - [`RuleTable::voice`] - the voice search table, every phrase weighs 1
//!
//! They overlap but are not identical. Custom tables can be loaded from JSON:
//!
//! ```json
//! [
//!   { "mood": "happy", "phrase": "bop", "weight": 6 },
//!   { "mood": "chill", "phrase": "rainy day", "weight": 8 }
//! ]
//! ```

use crate::mood::MoodCategory;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Reasons a keyword rule can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRule {
    #[error("keyword phrase must not be empty")]
    EmptyPhrase,
    #[error("keyword '{0}' must have a positive weight")]
    ZeroWeight(String),
}

/// A single weighted phrase for one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub mood: MoodCategory,
    /// Always stored lowercase.
    pub phrase: String,
    pub weight: u32,
}

impl KeywordRule {
    /// Builds a rule, lowercasing the phrase.
    ///
    /// Whitespace inside the phrase is kept as-is since matching is a plain
    /// substring test.
    pub fn new(mood: MoodCategory, phrase: &str, weight: u32) -> Result<Self, InvalidRule> {
        if phrase.trim().is_empty() {
            return Err(InvalidRule::EmptyPhrase);
        }
        if weight == 0 {
            return Err(InvalidRule::ZeroWeight(phrase.to_string()));
        }
        Ok(Self {
            mood,
            phrase: phrase.to_lowercase(),
            weight,
        })
    }

    /// Whether `lowercased` contains this rule's phrase.
    #[inline]
    #[must_use]
    pub fn matches(&self, lowercased: &str) -> bool {
        lowercased.contains(self.phrase.as_str())
    }
}

/// Ordered, immutable collection of keyword rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    rules: Vec<KeywordRule>,
}

lazy_static::lazy_static! {
    static ref WEIGHTED_TABLE: Arc<RuleTable> = Arc::new(RuleTable::from_static(WEIGHTED_RULES));
    static ref VOICE_TABLE: Arc<RuleTable> = Arc::new(RuleTable::from_static(VOICE_RULES));
}

impl RuleTable {
    /// Builds a table from already-validated rules.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// The weighted table used by the main mood search.
    #[must_use]
    pub fn weighted() -> Arc<RuleTable> {
        Arc::clone(&WEIGHTED_TABLE)
    }

    /// The unit-weight table used by the voice search screen.
    #[must_use]
    pub fn voice() -> Arc<RuleTable> {
        Arc::clone(&VOICE_TABLE)
    }

    /// Loads a custom table from a JSON array of rules.
    ///
    /// Every entry is validated the same way as [`KeywordRule::new`]; the
    /// first invalid entry aborts the load.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword rules from {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid keyword rules in {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: Vec<KeywordRule> =
            serde_json::from_str(text).context("Keyword rules must be a JSON array of {mood, phrase, weight}")?;

        let rules = raw
            .into_iter()
            .enumerate()
            .map(|(i, rule)| {
                KeywordRule::new(rule.mood, &rule.phrase, rule.weight)
                    .with_context(|| format!("Rule #{} is invalid", i + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    fn from_static(entries: &[(MoodCategory, &str, u32)]) -> Self {
        let rules = entries
            .iter()
            .map(|&(mood, phrase, weight)| KeywordRule {
                mood,
                phrase: phrase.to_string(),
                weight,
            })
            .collect();
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules that belong to `mood`, in table order.
    pub fn for_mood(&self, mood: MoodCategory) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter().filter(move |rule| rule.mood == mood)
    }
}

use crate::mood::MoodCategory::{Angry, Chill, Energetic, Happy, Romantic, Sad};

#[rustfmt::skip]
const WEIGHTED_RULES: &[(MoodCategory, &str, u32)] = &[
    (Happy, "happy", 10), (Happy, "cheerful", 8), (Happy, "joyful", 8), (Happy, "upbeat", 9),
    (Happy, "feel good", 9), (Happy, "positive", 7), (Happy, "dance", 6), (Happy, "party", 8),
    (Happy, "fun", 7), (Happy, "celebration", 6), (Happy, "joy", 8), (Happy, "good vibes", 8),
    (Happy, "optimistic", 6), (Happy, "bright", 5), (Happy, "sunny", 6), (Happy, "lively", 7),

    (Sad, "sad", 10), (Sad, "melancholy", 9), (Sad, "emotional", 7), (Sad, "depressing", 8),
    (Sad, "heartbreak", 9), (Sad, "cry", 8), (Sad, "tears", 8), (Sad, "lonely", 8),
    (Sad, "blue", 6), (Sad, "down", 6), (Sad, "grief", 8), (Sad, "sorrow", 8),
    (Sad, "ballad", 7), (Sad, "slow songs", 8), (Sad, "breakup", 9), (Sad, "missing", 7),

    (Energetic, "energetic", 10), (Energetic, "pump up", 9), (Energetic, "workout", 9), (Energetic, "exercise", 8),
    (Energetic, "gym", 8), (Energetic, "running", 7), (Energetic, "high energy", 9), (Energetic, "motivated", 7),
    (Energetic, "powerful", 7), (Energetic, "intense", 8), (Energetic, "adrenaline", 8), (Energetic, "cardio", 7),
    (Energetic, "rock", 6), (Energetic, "metal", 7), (Energetic, "electronic", 6), (Energetic, "edm", 8),

    (Chill, "chill", 10), (Chill, "relax", 9), (Chill, "calm", 8), (Chill, "peaceful", 8),
    (Chill, "zen", 7), (Chill, "meditation", 8), (Chill, "lo-fi", 9), (Chill, "ambient", 8),
    (Chill, "soft", 6), (Chill, "quiet", 6), (Chill, "soothing", 8), (Chill, "laid back", 8),
    (Chill, "study music", 9), (Chill, "background", 6), (Chill, "cafe", 7), (Chill, "mellow", 7),

    (Angry, "angry", 10), (Angry, "rage", 9), (Angry, "aggressive", 9), (Angry, "mad", 8),
    (Angry, "furious", 8), (Angry, "metal", 8), (Angry, "hardcore", 8), (Angry, "punk", 7),
    (Angry, "scream", 7), (Angry, "heavy", 7), (Angry, "brutal", 8), (Angry, "fierce", 7),
    (Angry, "hard rock", 8), (Angry, "alternative", 6), (Angry, "grunge", 7),

    (Romantic, "romantic", 10), (Romantic, "love", 9), (Romantic, "romance", 9), (Romantic, "valentine", 8),
    (Romantic, "date night", 8), (Romantic, "intimate", 8), (Romantic, "r&b", 7), (Romantic, "soul", 7),
    (Romantic, "smooth", 7), (Romantic, "sensual", 8), (Romantic, "passion", 7), (Romantic, "love songs", 9),
    (Romantic, "couples", 7), (Romantic, "wedding", 7), (Romantic, "anniversary", 7),
];

#[rustfmt::skip]
const VOICE_RULES: &[(MoodCategory, &str, u32)] = &[
    (Happy, "happy", 1), (Happy, "cheerful", 1), (Happy, "joyful", 1), (Happy, "upbeat", 1),
    (Happy, "feel good", 1), (Happy, "positive", 1), (Happy, "energetic music", 1), (Happy, "dance", 1),
    (Happy, "party", 1), (Happy, "fun", 1), (Happy, "celebration", 1), (Happy, "joy", 1),
    (Happy, "good vibes", 1), (Happy, "optimistic", 1), (Happy, "bright", 1), (Happy, "sunny", 1),
    (Happy, "lively", 1), (Happy, "peppy", 1),

    (Sad, "sad", 1), (Sad, "melancholy", 1), (Sad, "emotional", 1), (Sad, "depressing", 1),
    (Sad, "heartbreak", 1), (Sad, "cry", 1), (Sad, "tears", 1), (Sad, "lonely", 1),
    (Sad, "blue", 1), (Sad, "down", 1), (Sad, "grief", 1), (Sad, "sorrow", 1),
    (Sad, "ballad", 1), (Sad, "slow songs", 1), (Sad, "breakup", 1), (Sad, "lost love", 1),
    (Sad, "missing", 1), (Sad, "somber", 1),

    (Energetic, "energetic", 1), (Energetic, "pump up", 1), (Energetic, "workout", 1), (Energetic, "exercise", 1),
    (Energetic, "gym", 1), (Energetic, "running", 1), (Energetic, "high energy", 1), (Energetic, "motivated", 1),
    (Energetic, "powerful", 1), (Energetic, "intense", 1), (Energetic, "adrenaline", 1), (Energetic, "rock", 1),
    (Energetic, "metal", 1), (Energetic, "electronic", 1), (Energetic, "edm", 1), (Energetic, "bass", 1),
    (Energetic, "beats", 1), (Energetic, "cardio", 1),

    (Chill, "chill", 1), (Chill, "relax", 1), (Chill, "calm", 1), (Chill, "peaceful", 1),
    (Chill, "zen", 1), (Chill, "meditation", 1), (Chill, "lo-fi", 1), (Chill, "ambient", 1),
    (Chill, "soft", 1), (Chill, "quiet", 1), (Chill, "soothing", 1), (Chill, "laid back", 1),
    (Chill, "study music", 1), (Chill, "background", 1), (Chill, "cafe", 1), (Chill, "jazz", 1),
    (Chill, "acoustic", 1), (Chill, "mellow", 1),

    (Angry, "angry", 1), (Angry, "rage", 1), (Angry, "aggressive", 1), (Angry, "mad", 1),
    (Angry, "furious", 1), (Angry, "metal", 1), (Angry, "hardcore", 1), (Angry, "punk", 1),
    (Angry, "scream", 1), (Angry, "heavy", 1), (Angry, "brutal", 1), (Angry, "fierce", 1),
    (Angry, "rock", 1), (Angry, "hard rock", 1), (Angry, "alternative", 1), (Angry, "grunge", 1),
    (Angry, "intense", 1),

    (Romantic, "romantic", 1), (Romantic, "love", 1), (Romantic, "romance", 1), (Romantic, "valentine", 1),
    (Romantic, "date night", 1), (Romantic, "intimate", 1), (Romantic, "r&b", 1), (Romantic, "soul", 1),
    (Romantic, "smooth", 1), (Romantic, "sensual", 1), (Romantic, "passion", 1), (Romantic, "love songs", 1),
    (Romantic, "couples", 1), (Romantic, "wedding", 1), (Romantic, "anniversary", 1), (Romantic, "sexy", 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_lowercase_and_positive() {
        for table in [RuleTable::weighted(), RuleTable::voice()] {
            assert!(!table.is_empty());
            for rule in table.rules() {
                assert_eq!(rule.phrase, rule.phrase.to_lowercase());
                assert!(rule.weight > 0, "'{}' has zero weight", rule.phrase);
            }
        }
    }

    #[test]
    fn test_every_mood_has_rules_in_both_tables() {
        for mood in MoodCategory::ALL {
            assert!(RuleTable::weighted().for_mood(mood).count() >= 15);
            assert!(RuleTable::voice().for_mood(mood).count() >= 17);
        }
    }

    #[test]
    fn test_voice_table_uses_unit_weights() {
        assert!(RuleTable::voice().rules().iter().all(|r| r.weight == 1));
    }

    #[test]
    fn test_weighted_table_metal_is_shared() {
        let table = RuleTable::weighted();
        let metal: Vec<(MoodCategory, u32)> = table
            .rules()
            .iter()
            .filter(|r| r.phrase == "metal")
            .map(|r| (r.mood, r.weight))
            .collect();
        assert_eq!(metal, vec![(MoodCategory::Energetic, 7), (MoodCategory::Angry, 8)]);
    }

    #[test]
    fn test_new_rule_validation() {
        assert_eq!(
            KeywordRule::new(MoodCategory::Happy, "  ", 3),
            Err(InvalidRule::EmptyPhrase)
        );
        assert!(matches!(
            KeywordRule::new(MoodCategory::Happy, "bop", 0),
            Err(InvalidRule::ZeroWeight(_))
        ));

        let rule = KeywordRule::new(MoodCategory::Chill, "Rainy Day", 4).unwrap();
        assert_eq!(rule.phrase, "rainy day");
        assert!(rule.matches("a rainy day playlist"));
        assert!(!rule.matches("sunny"));
    }

    #[test]
    fn test_from_json_str() {
        let table = RuleTable::from_json_str(
            r#"[{"mood":"happy","phrase":"BOP","weight":6},{"mood":"sad","phrase":"rain","weight":2}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].phrase, "bop");
        assert_eq!(table.rules()[1].mood, MoodCategory::Sad);
    }

    #[test]
    fn test_from_json_str_rejects_bad_rules() {
        assert!(RuleTable::from_json_str(r#"[{"mood":"happy","phrase":"bop","weight":0}]"#).is_err());
        assert!(RuleTable::from_json_str(r#"[{"mood":"grumpy","phrase":"bop","weight":1}]"#).is_err());
        assert!(RuleTable::from_json_str("{}").is_err());
    }
}
