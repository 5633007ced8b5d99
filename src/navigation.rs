use crate::catalog::QueryCache;
use crate::model::{Id, Keyed};
use crate::recency::Relation;
use crate::selection::{Pane, SelectionStore};

/// A discrete directional key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The id immediately before `current` in `items`, or `None` when there
/// is no current id, the id is not in the collection, or it is first.
pub fn previous_sibling<T: Keyed>(items: &[T], current: Option<Id>) -> Option<Id> {
    let current = current?;
    let index = items.iter().position(|item| item.key() == current)?;
    if index == 0 {
        None
    } else {
        Some(items[index - 1].key())
    }
}

/// The id immediately after `current` in `items`, or `None` when there is
/// no current id, the id is not in the collection, or it is last.
pub fn next_sibling<T: Keyed>(items: &[T], current: Option<Id>) -> Option<Id> {
    let current = current?;
    let index = items.iter().position(|item| item.key() == current)?;
    items.get(index + 1).map(Keyed::key)
}

/// Apply one directional key press to the selection.
///
/// The active pane is derived from the selection depth. Left collapses
/// one level, Right drills in (preferring the recency cache over the
/// first item so returning to a branch resumes where it was left), and
/// Up/Down move between siblings in the pane's collection. Collections
/// that have not been fetched yet are treated as absent. Boundary cases
/// are silent no-ops, never errors.
///
/// Returns whether the selection changed, so the caller knows to redraw.
pub fn handle_direction(
    direction: Direction,
    store: &mut SelectionStore,
    queries: &QueryCache,
) -> bool {
    let selection = store.selection();
    let pane = selection.active_pane();

    match direction {
        Direction::Left => match pane {
            Pane::Chapters => {
                // Re-selecting the current video drops the chapter.
                match selection.video {
                    Some(video) => {
                        store.select_video(video);
                        true
                    }
                    None => false,
                }
            }
            Pane::Videos => match selection.channel {
                Some(channel) => {
                    store.select_channel(channel);
                    true
                }
                None => false,
            },
            Pane::Channels => false,
        },

        Direction::Right => match pane {
            Pane::Channels => {
                let Some(channel) = selection.channel else {
                    return false;
                };
                // A cached child wins even if it no longer exists in the
                // collection; a stale selection is harmless downstream.
                let target = store
                    .cache()
                    .lookup(Relation::ChannelVideo, channel)
                    .or_else(|| {
                        queries
                            .videos(channel)
                            .and_then(|videos| videos.first())
                            .map(Keyed::key)
                    });
                match target {
                    Some(video) => {
                        store.select_video(video);
                        true
                    }
                    None => false,
                }
            }
            Pane::Videos => {
                let Some(video) = selection.video else {
                    return false;
                };
                let target = store
                    .cache()
                    .lookup(Relation::VideoChapter, video)
                    .or_else(|| {
                        queries
                            .chapters(video)
                            .and_then(|chapters| chapters.first())
                            .map(Keyed::key)
                    });
                match target {
                    Some(chapter) => {
                        store.select_chapter(chapter);
                        true
                    }
                    None => false,
                }
            }
            // No deeper level exists.
            Pane::Chapters => false,
        },

        Direction::Up | Direction::Down => {
            let sibling = sibling_for_pane(direction, pane, store, queries);
            match (pane, sibling) {
                (Pane::Channels, Some(id)) => {
                    store.select_channel(id);
                    true
                }
                (Pane::Videos, Some(id)) => {
                    store.select_video(id);
                    true
                }
                (Pane::Chapters, Some(id)) => {
                    store.select_chapter(id);
                    true
                }
                (_, None) => false,
            }
        }
    }
}

fn sibling_for_pane(
    direction: Direction,
    pane: Pane,
    store: &SelectionStore,
    queries: &QueryCache,
) -> Option<Id> {
    let selection = store.selection();
    match pane {
        Pane::Channels => {
            let channels = queries.channels()?;
            step(direction, channels, selection.channel)
        }
        Pane::Videos => {
            let videos = queries.videos(selection.channel?)?;
            step(direction, videos, selection.video)
        }
        Pane::Chapters => {
            let chapters = queries.chapters(selection.video?)?;
            step(direction, chapters, selection.chapter)
        }
    }
}

fn step<T: Keyed>(direction: Direction, items: &[T], current: Option<Id>) -> Option<Id> {
    match direction {
        Direction::Up => previous_sibling(items, current),
        Direction::Down => next_sibling(items, current),
        Direction::Left | Direction::Right => None,
    }
}
