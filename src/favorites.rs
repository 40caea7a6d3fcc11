//! Favorite tracks, persisted as a JSON array of [`MediaItem`]s.

use crate::media::MediaItem;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Owned list of favorite tracks backed by a file.
///
/// Every mutation is written through to disk immediately.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    items: Vec<MediaItem>,
}

impl FavoritesStore {
    /// Opens the store at `path`.
    ///
    /// A missing file starts an empty list. An unreadable or corrupt file is
    /// logged and also starts empty; it is overwritten on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match Self::read(&path) {
            Ok(items) => {
                debug!("Loaded {} favorites from {}", items.len(), path.display());
                items
            }
            Err(e) => {
                warn!("Failed to load favorites: {e:#}");
                Vec::new()
            }
        };
        Self { path, items }
    }

    fn read(path: &Path) -> Result<Vec<MediaItem>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Cannot decode {}", path.display()))
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.items).context("Failed to encode favorites")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to save favorites to {}", self.path.display()))?;
        debug!("Favorites saved");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Adds `item`. Returns `false` if it was already a favorite.
    pub fn add(&mut self, item: &MediaItem) -> Result<bool> {
        if self.is_favorite(&item.id) {
            debug!("Item already in favorites: {}", item.id);
            return Ok(false);
        }
        let mut item = item.clone();
        item.is_favorite = true;
        info!("Added to favorites: {}", item.title);
        self.items.push(item);
        self.save()?;
        Ok(true)
    }

    /// Removes the item with `id`. Returns `false` if it was not a favorite.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        info!("Removed from favorites: {id}");
        self.save()?;
        Ok(true)
    }

    /// Adds or removes `item`; returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, item: &MediaItem) -> Result<bool> {
        if self.is_favorite(&item.id) {
            self.remove(&item.id)?;
            Ok(false)
        } else {
            self.add(item)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        info!("Cleared all favorites");
        self.save()
    }

    /// Sets `is_favorite` on each playlist entry from this store.
    pub fn mark(&self, playlist: &mut [MediaItem]) {
        for item in playlist {
            item.is_favorite = self.is_favorite(&item.id);
        }
    }
}
