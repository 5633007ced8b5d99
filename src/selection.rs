use serde::{Deserialize, Serialize};

use crate::model::Id;
use crate::recency::{RecencyCache, Relation};

/// The current position in the channel → video → chapter hierarchy.
///
/// Invariant: a video is only selected under a selected channel, and a
/// chapter only under a selected video. The setters on `SelectionStore`
/// are the only mutation path and preserve this by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub channel: Option<Id>,
    pub video: Option<Id>,
    pub chapter: Option<Id>,
}

/// Which column directional input currently acts on, derived fresh from
/// the selection on every use so there is no separate state to drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Channels,
    Videos,
    Chapters,
}

impl Selection {
    pub fn active_pane(&self) -> Pane {
        debug_assert!(
            self.video.is_none() || self.channel.is_some(),
            "selection invariant violated: video set without channel"
        );
        debug_assert!(
            self.chapter.is_none() || self.video.is_some(),
            "selection invariant violated: chapter set without video"
        );

        match (self.channel, self.video, self.chapter) {
            (Some(_), Some(_), Some(_)) => Pane::Chapters,
            (Some(_), Some(_), None) => Pane::Videos,
            _ => Pane::Channels,
        }
    }
}

type Listener = Box<dyn FnMut(&Selection) + Send>;

/// Owner of the selection triple and the recency cache.
///
/// The cache lives inside the store so that the read-outgoing-value,
/// record-to-cache, mutate-state sequence of every setter is a single
/// `&mut self` operation; no other writer can interleave.
pub struct SelectionStore {
    selection: Selection,
    cache: RecencyCache,
    listeners: Vec<Listener>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            cache: RecencyCache::new(),
            listeners: Vec::new(),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cache(&self) -> &RecencyCache {
        &self.cache
    }

    /// Register a callback invoked after every selection change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Selection) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select a channel, dropping any video/chapter selection beneath it.
    ///
    /// The outgoing video and chapter are recorded into the recency cache
    /// first, so drilling back into this branch later restores them.
    pub fn select_channel(&mut self, channel: Id) {
        self.stash_outgoing_chapter();
        self.stash_outgoing_video();
        self.selection = Selection {
            channel: Some(channel),
            video: None,
            chapter: None,
        };
        self.notify();
    }

    /// Select a video under the current channel, dropping any chapter.
    pub fn select_video(&mut self, video: Id) {
        self.stash_outgoing_chapter();
        self.stash_outgoing_video();
        self.selection.video = Some(video);
        self.selection.chapter = None;
        self.notify();
    }

    /// Select a chapter under the current video.
    pub fn select_chapter(&mut self, chapter: Id) {
        self.stash_outgoing_chapter();
        self.selection.chapter = Some(chapter);
        self.notify();
    }

    fn stash_outgoing_chapter(&mut self) {
        if let (Some(video), Some(chapter)) = (self.selection.video, self.selection.chapter) {
            self.cache.record(Relation::VideoChapter, video, chapter);
        }
    }

    fn stash_outgoing_video(&mut self) {
        if let (Some(channel), Some(video)) = (self.selection.channel, self.selection.video) {
            self.cache.record(Relation::ChannelVideo, channel, video);
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_initial_selection_is_empty() {
        let store = SelectionStore::new();
        assert_eq!(store.selection(), Selection::default());
        assert_eq!(store.selection().active_pane(), Pane::Channels);
    }

    #[test]
    fn test_pane_derivation() {
        let mut store = SelectionStore::new();
        store.select_channel(Id(1));
        assert_eq!(store.selection().active_pane(), Pane::Channels);

        store.select_video(Id(10));
        assert_eq!(store.selection().active_pane(), Pane::Videos);

        store.select_chapter(Id(100));
        assert_eq!(store.selection().active_pane(), Pane::Chapters);
    }

    #[test]
    fn test_select_channel_resets_descendants() {
        let mut store = SelectionStore::new();
        store.select_channel(Id(1));
        store.select_video(Id(10));
        store.select_chapter(Id(100));

        store.select_channel(Id(2));
        assert_eq!(
            store.selection(),
            Selection {
                channel: Some(Id(2)),
                video: None,
                chapter: None,
            }
        );
    }

    #[test]
    fn test_select_video_resets_chapter_keeps_channel() {
        let mut store = SelectionStore::new();
        store.select_channel(Id(1));
        store.select_video(Id(10));
        store.select_chapter(Id(100));

        store.select_video(Id(11));
        assert_eq!(
            store.selection(),
            Selection {
                channel: Some(Id(1)),
                video: Some(Id(11)),
                chapter: None,
            }
        );
    }

    #[test]
    fn test_outgoing_values_recorded_before_reset() {
        let mut store = SelectionStore::new();
        store.select_channel(Id(1));
        store.select_video(Id(10));
        store.select_chapter(Id(100));

        store.select_channel(Id(2));
        // What was being viewed under channel 1 / video 10 is remembered.
        assert_eq!(
            store.cache().lookup(Relation::ChannelVideo, Id(1)),
            Some(Id(10))
        );
        assert_eq!(
            store.cache().lookup(Relation::VideoChapter, Id(10)),
            Some(Id(100))
        );
    }

    #[test]
    fn test_select_chapter_records_outgoing_chapter_only() {
        let mut store = SelectionStore::new();
        store.select_channel(Id(1));
        store.select_video(Id(10));
        store.select_chapter(Id(100));
        store.select_chapter(Id(101));

        assert_eq!(
            store.cache().lookup(Relation::VideoChapter, Id(10)),
            Some(Id(100))
        );
        // No channel→video record happens until the video itself changes.
        assert_eq!(store.cache().lookup(Relation::ChannelVideo, Id(1)), None);
    }

    #[test]
    fn test_subscribers_notified_on_every_change() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let mut store = SelectionStore::new();
        store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.select_channel(Id(1));
        store.select_video(Id(10));
        store.select_chapter(Id(100));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
