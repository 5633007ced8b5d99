// Library module containing testable functions from main.rs

use std::path::Path;

use tokio::sync::mpsc;

use crate::app::App;
use crate::async_task::{Task, TaskResult};
use crate::catalog::Library;
use crate::error::Result;
use crate::event;

pub fn handle_task_result(app: &mut App, result: TaskResult, task_sender: &mpsc::Sender<Task>) {
    app.ui.is_loading = false;

    match result {
        TaskResult::ChannelsLoaded { channels } => {
            let count = channels.len();
            let first = channels.first().map(|c| c.id);
            app.queries.put_channels(channels);

            // Land on the first channel when nothing is selected yet, and
            // prefetch its children so Right works immediately.
            if app.selection().channel.is_none() {
                if let Some(id) = first {
                    app.store.select_channel(id);
                    event::request_missing_collections(app, task_sender);
                }
            }
            app.ui.status_message = if count == 0 {
                "Library has no channels".to_string()
            } else {
                format!("Loaded {} channels", count)
            };
        }
        TaskResult::VideosLoaded { channel_id, videos } => {
            log::debug!("cached {} videos for channel {}", videos.len(), channel_id);
            app.queries.put_videos(channel_id, videos);
        }
        TaskResult::ChaptersLoaded { video_id, chapters } => {
            log::debug!("cached {} chapters for video {}", chapters.len(), video_id);
            app.queries.put_chapters(video_id, chapters);
        }
        TaskResult::Error { message } => {
            app.ui.status_message = format!("Error: {}", message);
        }
    }
}

pub fn validate_library(path: &Path) -> Result<()> {
    let library = Library::load(path)?;

    println!("Library OK: {}", path.display());
    println!("  channels: {}", library.channels.len());
    println!("  videos:   {}", library.videos.len());
    println!("  chapters: {}", library.chapters.len());

    Ok(())
}
