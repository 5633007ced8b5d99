use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::catalog::Library;
use crate::model::{Channel, Chapter, Id, Video};

#[derive(Debug, Clone)]
pub enum Task {
    LoadChannels,
    LoadVideos { channel_id: Id },
    LoadChapters { video_id: Id },
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    ChannelsLoaded { channels: Vec<Channel> },
    VideosLoaded { channel_id: Id, videos: Vec<Video> },
    ChaptersLoaded { video_id: Id, chapters: Vec<Chapter> },
    Error { message: String },
}

/// Background data-fetch worker. Loads the library file once and answers
/// collection queries from it; the UI thread folds each result into its
/// `QueryCache` and never blocks on a fetch.
pub async fn run_worker(
    mut task_receiver: mpsc::Receiver<Task>,
    result_sender: mpsc::Sender<TaskResult>,
    library_path: PathBuf,
) {
    let library = match load_library(library_path).await {
        Ok(library) => library,
        Err(message) => {
            let _ = result_sender.send(TaskResult::Error { message }).await;
            return;
        }
    };

    while let Some(task) = task_receiver.recv().await {
        log::debug!("worker: handling {:?}", task);
        let result = match task {
            Task::LoadChannels => TaskResult::ChannelsLoaded {
                channels: library.channels.clone(),
            },
            Task::LoadVideos { channel_id } => TaskResult::VideosLoaded {
                channel_id,
                videos: library.videos_for(channel_id),
            },
            Task::LoadChapters { video_id } => TaskResult::ChaptersLoaded {
                video_id,
                chapters: library.chapters_for(video_id),
            },
        };

        if result_sender.send(result).await.is_err() {
            // Main thread has dropped the receiver, exit worker
            break;
        }
    }
}

async fn load_library(path: PathBuf) -> Result<Library, String> {
    // File parsing is sync; keep it off the async executor threads.
    tokio::task::spawn_blocking(move || {
        Library::load(&path).map_err(|e| format!("Failed to load library {}: {}", path.display(), e))
    })
    .await
    .map_err(|e| e.to_string())?
}
