use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque row identifier assigned by the data layer.
///
/// Identifiers are immutable once created; the navigation code only ever
/// compares and copies them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(pub i64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that lives in an ordered sibling collection.
pub trait Keyed {
    fn key(&self) -> Id;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: Id,
    pub channel_id: Id,
    /// The external player key (e.g. the YouTube video id), distinct from
    /// the catalog row id.
    pub youtube_id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Id,
    pub video_id: Id,
    pub title: String,
    /// Seconds into the video this chapter starts at.
    pub timestamp: f64,
    /// File name of the captured snapshot/clip, if one was taken.
    #[serde(default)]
    pub capture: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for Channel {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Video {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Chapter {
    fn key(&self) -> Id {
        self.id
    }
}

impl Chapter {
    /// Chapter timestamp rendered as `m:ss` / `h:mm:ss` for list rows.
    pub fn timestamp_label(&self) -> String {
        let total = self.timestamp.max(0.0) as u64;
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}
