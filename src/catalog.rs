use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClipshelfError, Result};
use crate::model::{Channel, Chapter, Id, Video};

/// The whole catalog as stored on disk: one JSON document holding every
/// channel, video and chapter. Collection order in the file is the
/// display and navigation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    pub channels: Vec<Channel>,
    pub videos: Vec<Video>,
    pub chapters: Vec<Chapter>,
}

impl Library {
    pub fn load(path: &Path) -> Result<Library> {
        let content = std::fs::read_to_string(path)?;
        let library: Library = serde_json::from_str(&content)?;
        library.validate()?;
        Ok(library)
    }

    /// Referential integrity check: unique ids, no dangling parents.
    pub fn validate(&self) -> Result<()> {
        let mut channel_ids = HashSet::new();
        for channel in &self.channels {
            if !channel_ids.insert(channel.id) {
                return Err(ClipshelfError::InvalidArgument(format!(
                    "duplicate channel id {}",
                    channel.id
                )));
            }
        }

        let mut video_ids = HashSet::new();
        for video in &self.videos {
            if !video_ids.insert(video.id) {
                return Err(ClipshelfError::InvalidArgument(format!(
                    "duplicate video id {}",
                    video.id
                )));
            }
            if !channel_ids.contains(&video.channel_id) {
                return Err(ClipshelfError::InvalidArgument(format!(
                    "video {} references unknown channel {}",
                    video.id, video.channel_id
                )));
            }
        }

        let mut chapter_ids = HashSet::new();
        for chapter in &self.chapters {
            if !chapter_ids.insert(chapter.id) {
                return Err(ClipshelfError::InvalidArgument(format!(
                    "duplicate chapter id {}",
                    chapter.id
                )));
            }
            if !video_ids.contains(&chapter.video_id) {
                return Err(ClipshelfError::InvalidArgument(format!(
                    "chapter {} references unknown video {}",
                    chapter.id, chapter.video_id
                )));
            }
        }

        Ok(())
    }

    /// Videos under `channel`, preserving file order.
    pub fn videos_for(&self, channel: Id) -> Vec<Video> {
        self.videos
            .iter()
            .filter(|v| v.channel_id == channel)
            .cloned()
            .collect()
    }

    /// Chapters under `video`, preserving file order.
    pub fn chapters_for(&self, video: Id) -> Vec<Chapter> {
        self.chapters
            .iter()
            .filter(|c| c.video_id == video)
            .cloned()
            .collect()
    }
}

/// Client-side cache of fetched collections, keyed the way the data layer
/// is queried: all channels, videos per channel, chapters per video.
///
/// A collection that has not landed yet is simply absent; navigation
/// treats absent the same as empty and never waits for it.
#[derive(Debug, Default)]
pub struct QueryCache {
    channels: Option<Vec<Channel>>,
    videos: HashMap<Id, Vec<Video>>,
    chapters: HashMap<Id, Vec<Chapter>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> Option<&[Channel]> {
        self.channels.as_deref()
    }

    pub fn videos(&self, channel: Id) -> Option<&[Video]> {
        self.videos.get(&channel).map(Vec::as_slice)
    }

    pub fn chapters(&self, video: Id) -> Option<&[Chapter]> {
        self.chapters.get(&video).map(Vec::as_slice)
    }

    pub fn put_channels(&mut self, channels: Vec<Channel>) {
        self.channels = Some(channels);
    }

    pub fn put_videos(&mut self, channel: Id, videos: Vec<Video>) {
        self.videos.insert(channel, videos);
    }

    pub fn put_chapters(&mut self, video: Id, chapters: Vec<Chapter>) {
        self.chapters.insert(video, chapters);
    }

    pub fn has_videos(&self, channel: Id) -> bool {
        self.videos.contains_key(&channel)
    }

    pub fn has_chapters(&self, video: Id) -> bool {
        self.chapters.contains_key(&video)
    }

    pub fn video_by_id(&self, channel: Id, video: Id) -> Option<&Video> {
        self.videos(channel)?.iter().find(|v| v.id == video)
    }

    pub fn chapter_by_id(&self, video: Id, chapter: Id) -> Option<&Chapter> {
        self.chapters(video)?.iter().find(|c| c.id == chapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample_library() -> Library {
        Library {
            channels: vec![
                Channel {
                    id: Id(1),
                    title: "rust talks".to_string(),
                    icon: None,
                },
                Channel {
                    id: Id(2),
                    title: "cooking".to_string(),
                    icon: None,
                },
            ],
            videos: vec![
                Video {
                    id: Id(10),
                    channel_id: Id(1),
                    youtube_id: "abc123".to_string(),
                    title: "ownership deep dive".to_string(),
                    thumbnail: None,
                    published_at: None,
                },
                Video {
                    id: Id(11),
                    channel_id: Id(2),
                    youtube_id: "def456".to_string(),
                    title: "sourdough basics".to_string(),
                    thumbnail: None,
                    published_at: None,
                },
            ],
            chapters: vec![Chapter {
                id: Id(100),
                video_id: Id(10),
                title: "borrow checker".to_string(),
                timestamp: 120.0,
                capture: None,
                created_at: None,
            }],
        }
    }

    #[test]
    fn test_validate_accepts_consistent_library() {
        assert!(sample_library().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_video() {
        let mut library = sample_library();
        library.videos[0].channel_id = Id(99);
        assert_matches!(
            library.validate(),
            Err(ClipshelfError::InvalidArgument(_))
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_chapter_id() {
        let mut library = sample_library();
        let mut dup = library.chapters[0].clone();
        dup.title = "other".to_string();
        library.chapters.push(dup);
        assert_matches!(
            library.validate(),
            Err(ClipshelfError::InvalidArgument(_))
        );
    }

    #[test]
    fn test_filters_preserve_order_and_parent() {
        let library = sample_library();
        let videos = library.videos_for(Id(1));
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, Id(10));
        assert!(library.videos_for(Id(3)).is_empty());
        assert_eq!(library.chapters_for(Id(10)).len(), 1);
    }

    #[test]
    fn test_query_cache_absent_until_put() {
        let mut cache = QueryCache::new();
        assert!(cache.channels().is_none());
        assert!(cache.videos(Id(1)).is_none());
        assert!(!cache.has_videos(Id(1)));

        let library = sample_library();
        cache.put_videos(Id(1), library.videos_for(Id(1)));
        assert!(cache.has_videos(Id(1)));
        assert_eq!(cache.videos(Id(1)).unwrap().len(), 1);
        // Fetched-but-empty is present, not absent.
        cache.put_videos(Id(3), Vec::new());
        assert!(cache.has_videos(Id(3)));
        assert_eq!(cache.videos(Id(3)).unwrap().len(), 0);
    }

    #[test]
    fn test_load_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        let library = sample_library();
        std::fs::write(&path, serde_json::to_string_pretty(&library).unwrap()).unwrap();

        let loaded = Library::load(&path).unwrap();
        assert_eq!(loaded.channels.len(), 2);
        assert_eq!(loaded.videos.len(), 2);
        assert_eq!(loaded.chapters[0].id, Id(100));
    }
}
