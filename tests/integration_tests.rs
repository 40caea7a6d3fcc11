//! # Integration Tests for Moodify
//!
//! End-to-end checks across modules and of the `moodify` binary.

use anyhow::Result;
use moodify::classifier::{classify, DetectionPreset, MatchSource, MoodClassifier};
use moodify::config::Settings;
use moodify::favorites::FavoritesStore;
use moodify::media::sample_playlist;
use moodify::mood::MoodCategory;
use moodify::provider::{PlaylistProvider, SampleCatalog, SearchResponseFile};
use moodify::session::MoodSession;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const RESPONSE: &str = r#"{
    "items": [
        {
            "id": { "videoId": "lofi1" },
            "snippet": {
                "title": "lofi hip hop radio",
                "channelTitle": "Lofi Girl",
                "thumbnails": { "default": { "url": "https://i.ytimg.com/lofi1.jpg" } }
            }
        },
        {
            "id": { "videoId": "lofi2" },
            "snippet": {
                "title": "jazz cafe",
                "channelTitle": "Cafe Music BGM",
                "thumbnails": { "default": { "url": "https://i.ytimg.com/lofi2.jpg" } }
            }
        }
    ]
}"#;

/// Run the binary with its data directory redirected into `home`.
fn run_moodify(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_moodify"))
        .args(args)
        .env("XDG_DATA_HOME", home.join("data"))
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("MOODIFY_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run moodify")
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(classify("I want happy upbeat feel good songs", 5), Some(MoodCategory::Happy));
        assert_eq!(classify("gym workout pump up", 5), Some(MoodCategory::Energetic));
        assert_eq!(classify("xyz completely unrelated text", 0), None);
        assert_eq!(classify("", 0), None);
        assert_eq!(classify("", 5), None);
        assert_eq!(classify("HAPPY SONGS", 0), classify("happy songs", 0));
    }

    #[test]
    fn test_presets_differ_on_voice_only_keywords() {
        let strict = MoodClassifier::from_preset(DetectionPreset::Strict);
        let lenient = MoodClassifier::from_preset(DetectionPreset::Lenient);

        // "somber" exists only in the voice table
        assert_eq!(strict.classify("something somber"), None);
        assert_eq!(lenient.classify("something somber"), Some(MoodCategory::Sad));
    }

    #[test]
    fn test_classifier_is_shareable_across_threads() {
        let classifier = MoodClassifier::default();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let classifier = classifier.clone();
                std::thread::spawn(move || classifier.classify("chill lo-fi beats"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(MoodCategory::Chill));
        }
    }

    #[test]
    fn test_detailed_result_reports_literal_source() -> Result<()> {
        let settings = Settings {
            minimum_score: Some(50),
            ..Settings::default()
        };
        let result = settings.classifier()?.classify_detailed("feeling angry and furious");
        assert_eq!(result.mood, Some(MoodCategory::Angry));
        assert_eq!(result.source, Some(MatchSource::Literal));
        assert_eq!(result.score, 18);
        Ok(())
    }
}

#[cfg(test)]
mod session_integration_tests {
    use super::*;

    #[test]
    fn test_saved_response_drives_raw_search() -> Result<()> {
        let dir = TempDir::new()?;
        let response = dir.path().join("response.json");
        fs::write(&response, RESPONSE)?;

        let mut session = MoodSession::new(SearchResponseFile::new(&response));
        session.search("taylor swift");

        assert_eq!(session.detected_mood(), None);
        assert_eq!(session.playlist().len(), 2);
        assert_eq!(session.playlist()[0].id, "lofi1");
        assert_eq!(session.status(), Some("Found 2 songs for 'taylor swift'"));
        Ok(())
    }

    #[test]
    fn test_broken_response_falls_back_to_samples() -> Result<()> {
        let dir = TempDir::new()?;
        let response = dir.path().join("response.json");
        fs::write(&response, "<html>quota</html>")?;

        let mut session = MoodSession::new(SearchResponseFile::new(&response));
        session.select_mood(MoodCategory::Chill);

        assert_eq!(session.status(), Some("Network error. Using sample songs."));
        assert_eq!(session.playlist(), sample_playlist(MoodCategory::Chill).as_slice());
        Ok(())
    }

    #[test]
    fn test_favorites_survive_sessions() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("favorites.json");

        let mut first = MoodSession::new(SampleCatalog::new()).with_favorites(FavoritesStore::open(&path));
        first.search("romantic dinner");
        assert!(first.toggle_favorite(0).unwrap()?);

        let mut second = MoodSession::new(SampleCatalog::new()).with_favorites(FavoritesStore::open(&path));
        second.select_mood(MoodCategory::Romantic);
        assert!(second.playlist()[0].is_favorite);
        assert!(!second.playlist()[1].is_favorite);
        Ok(())
    }

    #[test]
    fn test_sample_catalog_is_a_provider_object() {
        let provider: Box<dyn PlaylistProvider> = Box::new(SampleCatalog::new());
        let items = provider.search(MoodCategory::Angry.search_query()).unwrap();
        assert_eq!(items.len(), 5);
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let home = TempDir::new().unwrap();
        let output = run_moodify(home.path(), &["--help"]);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("moodify"));
        assert!(stdout.contains("detect"));
        assert!(stdout.contains("search"));
        assert!(stdout.contains("favorites"));
    }

    #[test]
    fn test_detect_command() {
        let home = TempDir::new().unwrap();
        let output = run_moodify(home.path(), &["detect", "gym", "workout", "pump", "up"]);
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("energetic"));

        let output = run_moodify(home.path(), &["detect", "xyz completely unrelated text"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "none");
    }

    #[test]
    fn test_detect_json_output() -> Result<()> {
        let home = TempDir::new()?;
        let output = run_moodify(home.path(), &["detect", "--json", "metal"]);
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["mood"], "angry");
        assert_eq!(value["source"], "keywords");
        assert_eq!(value["score"], 8);
        Ok(())
    }

    #[test]
    fn test_detect_file_uses_settings_file() -> Result<()> {
        let home = TempDir::new()?;
        let lines = home.path().join("lines.txt");
        fs::write(&lines, "metal\nsome jazz\nnothing\n")?;
        let settings = home.path().join("settings.json");
        fs::write(&settings, r#"{"preset": "lenient"}"#)?;

        let output = run_moodify(
            home.path(),
            &["--config", settings.to_str().unwrap(), "detect", "--file", lines.to_str().unwrap()],
        );
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let rows: Vec<&str> = stdout.lines().collect();
        assert_eq!(rows, ["energetic\tmetal", "chill\tsome jazz", "none\tnothing"]);
        Ok(())
    }

    #[test]
    fn test_voice_search_honors_detection_flags() {
        let home = TempDir::new().unwrap();
        let output = run_moodify(home.path(), &["search", "--voice", "some", "jazz"]);
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Voice detected: Chill"));

        let output = run_moodify(home.path(), &["search", "--voice", "--min-score", "100", "some", "jazz"]);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("Voice detected"));
        assert!(stdout.contains("Searching: some jazz"));
    }

    #[test]
    fn test_concerts_command() -> Result<()> {
        let home = TempDir::new()?;
        let output = run_moodify(home.path(), &["concerts", "--city", "seattle", "--json"]);
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value[0]["artistName"], "Bruno Mars");

        let output = run_moodify(home.path(), &["concerts", "--artist", "Coldplay", "--city", "Dallas"]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("No Coldplay concerts found in Dallas"));
        Ok(())
    }

    #[test]
    fn test_query_command() {
        let home = TempDir::new().unwrap();
        let output = run_moodify(home.path(), &["query", "sad"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            "sad emotional ballad music heartbreak songs"
        );
    }

    #[test]
    fn test_favorites_commands() {
        let home = TempDir::new().unwrap();
        assert!(run_moodify(home.path(), &["favorites", "add", "chill", "2"]).status.success());

        let output = run_moodify(home.path(), &["favorites", "list"]);
        assert!(String::from_utf8_lossy(&output.stdout).contains("Chill_1"));

        assert!(!run_moodify(home.path(), &["favorites", "add", "chill", "9"]).status.success());
        assert!(run_moodify(home.path(), &["favorites", "remove", "Chill_1"]).status.success());
        assert!(!run_moodify(home.path(), &["favorites", "remove", "Chill_1"]).status.success());
    }

    #[test]
    fn test_completion_generation() {
        let home = TempDir::new().unwrap();
        let output = run_moodify(home.path(), &["completion", "bash"]);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_moodify"));
        assert!(stdout.contains("complete"));
    }
}
