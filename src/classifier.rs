//! Mood detection from free text.
//!
//! Weighted keyword scoring with a minimum-score gate, falling back to
//! looking for a mood's own name in the text.

use crate::mood::MoodCategory;
use crate::rules::RuleTable;
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Minimum score used by the main search path.
pub const STRICT_MINIMUM_SCORE: u32 = 5;

/// Minimum score used by the voice search path (any keyword hit wins).
pub const LENIENT_MINIMUM_SCORE: u32 = 0;

/// Named classifier configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DetectionPreset {
    /// Weighted table, score must reach 5
    #[default]
    Strict,
    /// Voice table, any keyword hit is enough
    Lenient,
}

impl DetectionPreset {
    #[must_use]
    pub fn rules(self) -> Arc<RuleTable> {
        match self {
            DetectionPreset::Strict => RuleTable::weighted(),
            DetectionPreset::Lenient => RuleTable::voice(),
        }
    }

    #[must_use]
    pub const fn minimum_score(self) -> u32 {
        match self {
            DetectionPreset::Strict => STRICT_MINIMUM_SCORE,
            DetectionPreset::Lenient => LENIENT_MINIMUM_SCORE,
        }
    }
}

/// How a mood was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    /// Weighted keywords produced an accepted score.
    Keywords,
    /// The mood's own name appeared in the text.
    Literal,
}

/// One keyword hit, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    pub mood: MoodCategory,
    pub phrase: String,
    pub weight: u32,
}

/// Outcome of a single classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub mood: Option<MoodCategory>,
    pub source: Option<MatchSource>,
    /// Best keyword score seen, accepted or not.
    pub score: u32,
    pub matches: Vec<KeywordMatch>,
    scores: [u32; 6],
}

impl Classification {
    /// Accumulated keyword score for `mood`.
    #[must_use]
    pub fn score_of(&self, mood: MoodCategory) -> u32 {
        self.scores[mood.index()]
    }
}

/// Keyword-scoring mood classifier.
///
/// Cheap to clone and safe to share between threads: it only holds an
/// immutable rule table and a threshold.
///
/// # Examples
///
/// ```
/// use moodify::classifier::{DetectionPreset, MoodClassifier};
/// use moodify::mood::MoodCategory;
///
/// let classifier = MoodClassifier::from_preset(DetectionPreset::Strict);
/// assert_eq!(
///     classifier.classify("gym workout pump up"),
///     Some(MoodCategory::Energetic)
/// );
/// assert_eq!(classifier.classify("xyz completely unrelated text"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MoodClassifier {
    rules: Arc<RuleTable>,
    minimum_score: u32,
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::from_preset(DetectionPreset::default())
    }
}

impl MoodClassifier {
    pub fn new(rules: Arc<RuleTable>, minimum_score: u32) -> Self {
        Self { rules, minimum_score }
    }

    pub fn from_preset(preset: DetectionPreset) -> Self {
        Self::new(preset.rules(), preset.minimum_score())
    }

    #[must_use]
    pub fn with_minimum_score(self, minimum_score: u32) -> Self {
        Self { minimum_score, ..self }
    }

    #[must_use]
    pub fn minimum_score(&self) -> u32 {
        self.minimum_score
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Detected mood for `text`, if any.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<MoodCategory> {
        self.classify_detailed(text).mood
    }

    /// Full classification including per-mood scores and keyword hits.
    ///
    /// Ties between equally scored moods go to the one declared first in
    /// [`MoodCategory`].
    #[must_use]
    pub fn classify_detailed(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        let mut scores = [0u32; 6];
        let mut matches = Vec::new();

        for rule in self.rules.rules().iter().filter(|rule| rule.matches(&lowered)) {
            trace!("Found keyword '{}' for {} (weight: {})", rule.phrase, rule.mood, rule.weight);
            scores[rule.mood.index()] = scores[rule.mood.index()].saturating_add(rule.weight);
            matches.push(KeywordMatch {
                mood: rule.mood,
                phrase: rule.phrase.clone(),
                weight: rule.weight,
            });
        }

        let best = best_mood(&scores);
        let score = best.map_or(0, |(_, s)| s);

        if let Some((mood, best_score)) = best {
            if best_score >= self.minimum_score {
                debug!("Best mood match: {mood} (score: {best_score})");
                return Classification {
                    mood: Some(mood),
                    source: Some(MatchSource::Keywords),
                    score,
                    matches,
                    scores,
                };
            }
            debug!(
                "Best mood {mood} scored {best_score}, below minimum {}",
                self.minimum_score
            );
        }

        if let Some(mood) = literal_match(&lowered) {
            debug!("Found direct mood match: {mood}");
            return Classification {
                mood: Some(mood),
                source: Some(MatchSource::Literal),
                score,
                matches,
                scores,
            };
        }

        debug!("No mood detected in query: {text}");
        Classification {
            mood: None,
            source: None,
            score,
            matches,
            scores,
        }
    }

    /// Classifies many lines in parallel, keeping input order.
    pub fn classify_all<S>(&self, lines: &[S]) -> Vec<Option<MoodCategory>>
    where
        S: AsRef<str> + Sync,
    {
        lines.par_iter().map(|line| self.classify(line.as_ref())).collect()
    }
}

/// Classifies with the weighted table and the given threshold.
#[must_use]
pub fn classify(text: &str, minimum_score: u32) -> Option<MoodCategory> {
    MoodClassifier::new(RuleTable::weighted(), minimum_score).classify(text)
}

/// Highest nonzero score, first mood in declaration order on ties.
fn best_mood(scores: &[u32; 6]) -> Option<(MoodCategory, u32)> {
    MoodCategory::ALL
        .into_iter()
        .map(|mood| (mood, scores[mood.index()]))
        .filter(|&(_, score)| score > 0)
        .fold(None, |best, (mood, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((mood, score)),
        })
}

fn literal_match(lowered: &str) -> Option<MoodCategory> {
    MoodCategory::ALL
        .into_iter()
        .find(|mood| lowered.contains(mood.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::KeywordRule;

    fn strict() -> MoodClassifier {
        MoodClassifier::from_preset(DetectionPreset::Strict)
    }

    fn lenient() -> MoodClassifier {
        MoodClassifier::from_preset(DetectionPreset::Lenient)
    }

    #[test]
    fn test_canonical_names_classify_to_themselves() {
        for mood in MoodCategory::ALL {
            assert_eq!(strict().classify(mood.name()), Some(mood), "strict: {mood}");
            assert_eq!(lenient().classify(mood.name()), Some(mood), "lenient: {mood}");
            assert_eq!(classify(mood.name(), 0), Some(mood));
        }
    }

    #[test]
    fn test_empty_input_has_no_mood() {
        for minimum in [0, 1, 5, 100] {
            assert_eq!(classify("", minimum), None);
        }
        let result = lenient().classify_detailed("");
        assert_eq!(result.mood, None);
        assert_eq!(result.source, None);
        assert_eq!(result.score, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_weighted_scores_accumulate() {
        let result = strict().classify_detailed("I want happy upbeat feel good songs");
        assert_eq!(result.mood, Some(MoodCategory::Happy));
        assert_eq!(result.source, Some(MatchSource::Keywords));
        assert_eq!(result.score, 28);
        assert_eq!(result.score_of(MoodCategory::Happy), 28);
        assert_eq!(result.matches.len(), 3);
    }

    #[test]
    fn test_workout_phrase_is_energetic() {
        let result = strict().classify_detailed("gym workout pump up");
        assert_eq!(result.mood, Some(MoodCategory::Energetic));
        assert_eq!(result.score, 26);
    }

    #[test]
    fn test_unrelated_text_has_no_mood() {
        assert_eq!(classify("xyz completely unrelated text", 0), None);
        assert_eq!(lenient().classify("xyz completely unrelated text"), None);
    }

    #[test]
    fn test_shared_keyword_is_stable() {
        let first = classify("metal", 5);
        for _ in 0..50 {
            assert_eq!(classify("metal", 5), first);
        }
        // angry weighs metal 8, energetic 7
        assert_eq!(first, Some(MoodCategory::Angry));

        // voice table weighs both at 1, declaration order decides
        assert_eq!(lenient().classify("metal"), Some(MoodCategory::Energetic));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(strict().classify("HAPPY SONGS"), strict().classify("happy songs"));
        assert_eq!(strict().classify("HAPPY SONGS"), Some(MoodCategory::Happy));
        assert_eq!(lenient().classify("Lo-Fi Study Music"), Some(MoodCategory::Chill));
    }

    #[test]
    fn test_threshold_boundary() {
        // rage, mad, furious, punk: four unit-weight hits for angry
        let text = "rage mad furious punk";
        let gated = MoodClassifier::new(RuleTable::voice(), 5);
        let open = MoodClassifier::new(RuleTable::voice(), 0);

        assert_eq!(gated.classify_detailed(text).score, 4);
        assert_eq!(gated.classify(text), None);
        assert_eq!(open.classify(text), Some(MoodCategory::Angry));
    }

    #[test]
    fn test_literal_fallback_after_threshold_rejection() {
        let rules = Arc::new(RuleTable::new(vec![
            KeywordRule::new(MoodCategory::Romantic, "candle", 2).unwrap(),
        ]));
        let classifier = MoodClassifier::new(rules, 5);

        let result = classifier.classify_detailed("candle light, feeling sad");
        assert_eq!(result.mood, Some(MoodCategory::Sad));
        assert_eq!(result.source, Some(MatchSource::Literal));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_literal_fallback_uses_declaration_order() {
        let classifier = MoodClassifier::new(Arc::new(RuleTable::default()), 0);
        assert_eq!(classifier.classify("romantic but angry and sad"), Some(MoodCategory::Sad));
        assert_eq!(classifier.classify("chill-romantic"), Some(MoodCategory::Chill));
    }

    #[test]
    fn test_substring_matching_is_permissive() {
        let result = lenient().classify_detailed("happy-peppy-song");
        let phrases: Vec<&str> = result.matches.iter().map(|m| m.phrase.as_str()).collect();
        assert!(phrases.contains(&"happy"));
        assert!(phrases.contains(&"peppy"));
        assert_eq!(result.mood, Some(MoodCategory::Happy));
    }

    #[test]
    fn test_tie_break_prefers_earlier_mood() {
        let rules = Arc::new(RuleTable::new(vec![
            KeywordRule::new(MoodCategory::Romantic, "tune", 3).unwrap(),
            KeywordRule::new(MoodCategory::Sad, "tune", 3).unwrap(),
        ]));
        let classifier = MoodClassifier::new(rules, 0);
        assert_eq!(classifier.classify("a tune"), Some(MoodCategory::Sad));
    }

    #[test]
    fn test_long_input_does_not_fail() {
        let text = "la ".repeat(20_000) + "chill";
        assert_eq!(strict().classify(&text), Some(MoodCategory::Chill));
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let lines = vec!["sad", "nothing here", "gym time", "date night"];
        assert_eq!(
            strict().classify_all(&lines),
            vec![
                Some(MoodCategory::Sad),
                None,
                Some(MoodCategory::Energetic),
                Some(MoodCategory::Romantic),
            ]
        );
    }

    #[test]
    fn test_with_minimum_score_overrides_preset() {
        let classifier = strict().with_minimum_score(100);
        assert_eq!(classifier.minimum_score(), 100);
        // keyword score 10 rejected, literal fallback still finds it
        let result = classifier.classify_detailed("happy");
        assert_eq!(result.source, Some(MatchSource::Literal));
    }
}
