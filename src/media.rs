//! Playlist entries and the built-in sample playlists.

use crate::mood::MoodCategory;
use serde::{Deserialize, Serialize};

/// Duration shown when a catalog does not report one.
pub const DEFAULT_DURATION: &str = "3:45";

/// A playable track as returned by a playlist provider.
///
/// Two items are equal when their ids are equal, regardless of metadata or
/// favorite state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "videoURL")]
    pub video_url: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default)]
    pub is_favorite: bool,
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MediaItem {}

impl MediaItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        thumbnail_url: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            thumbnail_url: thumbnail_url.into(),
            video_url: video_url.into(),
            duration: default_duration(),
            is_favorite: false,
        }
    }
}

fn sample_titles(mood: MoodCategory) -> [&'static str; 5] {
    match mood {
        MoodCategory::Happy => [
            "Happy - Pharrell Williams",
            "Can't Stop the Feeling - Justin Timberlake",
            "Good as Hell - Lizzo",
            "Uptown Funk - Bruno Mars",
            "Shake It Off - Taylor Swift",
        ],
        MoodCategory::Sad => [
            "Someone Like You - Adele",
            "Hurt - Johnny Cash",
            "Mad World - Gary Jules",
            "Black - Pearl Jam",
            "Tears in Heaven - Eric Clapton",
        ],
        MoodCategory::Energetic => [
            "Eye of the Tiger - Survivor",
            "Don't Stop Me Now - Queen",
            "Pump It - Black Eyed Peas",
            "Thunder - Imagine Dragons",
            "Stronger - Kanye West",
        ],
        MoodCategory::Chill => [
            "Weightless - Marconi Union",
            "Clair de Lune - Debussy",
            "Aqueous Transmission - Incubus",
            "Porcelain - Moby",
            "Teardrop - Massive Attack",
        ],
        MoodCategory::Angry => [
            "Break Stuff - Limp Bizkit",
            "Chop Suey! - System of a Down",
            "Bodies - Drowning Pool",
            "Killing in the Name - Rage Against the Machine",
            "Indestructible - Disturbed",
        ],
        MoodCategory::Romantic => [
            "All of Me - John Legend",
            "Thinking Out Loud - Ed Sheeran",
            "Perfect - Ed Sheeran",
            "At Last - Etta James",
            "Make You Feel My Love - Adele",
        ],
    }
}

/// Offline playlist for `mood`, used when no catalog is reachable.
///
/// Ids are `<Label>_<n>` so they stay stable between runs and can be
/// stored as favorites.
#[must_use]
pub fn sample_playlist(mood: MoodCategory) -> Vec<MediaItem> {
    sample_titles(mood)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let (title, artist) = entry.split_once(" - ").unwrap_or((entry, "Unknown Artist"));
            MediaItem::new(
                format!("{}_{index}", mood.label()),
                title,
                artist,
                "",
                format!("https://www.youtube.com/watch?v=sample{index}"),
            )
        })
        .collect()
}
