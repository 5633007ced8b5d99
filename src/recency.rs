use std::collections::{HashMap, VecDeque};

use crate::model::Id;

/// Upper bound on remembered parent/child pairs.
pub const CACHE_MAX_ITEMS: usize = 500;

/// Which parent/child edge of the hierarchy a cache entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    ChannelVideo,
    VideoChapter,
}

/// Bounded "last child selected under this parent" store.
///
/// A hash map holds the current child per `(relation, parent)` pair and a
/// deque of keys tracks recency order, most recent at the front. The two
/// are kept in sync on every `record`; when the map is over capacity the
/// key at the back of the deque is evicted.
#[derive(Debug, Default)]
pub struct RecencyCache {
    entries: HashMap<(Relation, Id), Id>,
    order: VecDeque<(Relation, Id)>,
}

impl RecencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `child` as the most recent selection under `parent`.
    ///
    /// Re-recording an existing pair replaces the child and refreshes the
    /// pair's recency position; it never duplicates the key.
    pub fn record(&mut self, relation: Relation, parent: Id, child: Id) {
        let key = (relation, parent);
        if self.entries.insert(key, child).is_some() {
            if let Some(pos) = self.order.iter().position(|k| *k == key) {
                self.order.remove(pos);
            }
        }
        self.order.push_front(key);

        while self.entries.len() > CACHE_MAX_ITEMS {
            match self.order.pop_back() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    /// The most recently recorded child under `parent`, if any.
    pub fn lookup(&self, relation: Relation, parent: Id) -> Option<Id> {
        self.entries.get(&(relation, parent)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_on_empty_cache() {
        let cache = RecencyCache::new();
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(1)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_record_and_lookup() {
        let mut cache = RecencyCache::new();
        cache.record(Relation::ChannelVideo, Id(1), Id(10));
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(1)), Some(Id(10)));
        assert_eq!(cache.lookup(Relation::VideoChapter, Id(1)), None);
    }

    #[test]
    fn test_most_recent_record_wins() {
        let mut cache = RecencyCache::new();
        cache.record(Relation::VideoChapter, Id(7), Id(100));
        cache.record(Relation::VideoChapter, Id(7), Id(200));
        assert_eq!(cache.lookup(Relation::VideoChapter, Id(7)), Some(Id(200)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_relations_do_not_collide() {
        let mut cache = RecencyCache::new();
        cache.record(Relation::ChannelVideo, Id(1), Id(10));
        cache.record(Relation::VideoChapter, Id(1), Id(20));
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(1)), Some(Id(10)));
        assert_eq!(cache.lookup(Relation::VideoChapter, Id(1)), Some(Id(20)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_drops_least_recent() {
        let mut cache = RecencyCache::new();
        for i in 0..CACHE_MAX_ITEMS as i64 {
            cache.record(Relation::ChannelVideo, Id(i), Id(i + 1000));
        }
        assert_eq!(cache.len(), CACHE_MAX_ITEMS);

        // One more distinct pair pushes out the oldest (parent 0).
        cache.record(Relation::ChannelVideo, Id(9999), Id(1));
        assert_eq!(cache.len(), CACHE_MAX_ITEMS);
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(0)), None);
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(1)), Some(Id(1001)));
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(9999)), Some(Id(1)));
    }

    #[test]
    fn test_re_record_refreshes_recency() {
        let mut cache = RecencyCache::new();
        for i in 0..CACHE_MAX_ITEMS as i64 {
            cache.record(Relation::ChannelVideo, Id(i), Id(i));
        }
        // Touch the oldest pair, then add a new one: parent 1 is now the
        // least recent and should be the eviction victim, not parent 0.
        cache.record(Relation::ChannelVideo, Id(0), Id(42));
        cache.record(Relation::ChannelVideo, Id(8888), Id(1));

        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(0)), Some(Id(42)));
        assert_eq!(cache.lookup(Relation::ChannelVideo, Id(1)), None);
    }
}
