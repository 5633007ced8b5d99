use crossterm::event::{Event, KeyCode, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tokio::sync::mpsc;

use crate::app::App;
use crate::async_task::Task;
use crate::model::Id;
use crate::navigation::{self, Direction};
use crate::selection::Pane;

pub fn handle_event(
    event: Event,
    app: &mut App,
    task_sender: &mpsc::Sender<Task>,
) -> Result<bool, Box<dyn std::error::Error>> {
    // Returns true if UI needs update
    match event {
        Event::Key(key) => {
            if app.ui.omnibar_open {
                return Ok(handle_omnibar_key(app, key.code, task_sender));
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                    return Ok(false); // No render needed when quitting
                }
                KeyCode::Char('/') => {
                    app.ui.omnibar_open = true;
                    app.ui.omnibar_query.clear();
                    return Ok(true);
                }
                KeyCode::Char(' ') => {
                    app.player.toggle_play_pause();
                    return Ok(false);
                }
                KeyCode::Char('.') => {
                    app.player.fast_forward();
                    return Ok(false);
                }
                KeyCode::Char(',') => {
                    app.player.rewind();
                    return Ok(false);
                }
                KeyCode::Char('p') => {
                    app.ui.show_preview = !app.ui.show_preview;
                    return Ok(true);
                }
                KeyCode::Char('d') => {
                    app.ui.show_description = !app.ui.show_description;
                    return Ok(true);
                }
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.ui.force_redraw = true;
                    app.ui.status_message = "Screen refreshed".to_string();
                    return Ok(true);
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                    let direction = match key.code {
                        KeyCode::Left => Direction::Left,
                        KeyCode::Right => Direction::Right,
                        KeyCode::Up => Direction::Up,
                        _ => Direction::Down,
                    };
                    let changed =
                        navigation::handle_direction(direction, &mut app.store, &app.queries);
                    if changed {
                        request_missing_collections(app, task_sender);
                    }
                    return Ok(changed);
                }
                KeyCode::Enter => {
                    return Ok(handle_activate(app));
                }
                _ => {}
            }
        }
        Event::Resize(_, _) => {
            return Ok(true);
        }
        _ => {}
    }

    Ok(false)
}

/// Enter on a video cues it in the player; Enter on a chapter jumps the
/// player to the chapter timestamp.
fn handle_activate(app: &mut App) -> bool {
    match app.active_pane() {
        Pane::Videos => {
            let Some(video) = app.selected_video().cloned() else {
                return false;
            };
            app.player.cue(&video.youtube_id, None);
            app.cued_video = Some(video.youtube_id.clone());
            app.ui.status_message = format!("Playing: {}", video.title);
            true
        }
        Pane::Chapters => {
            let (Some(video), Some(chapter)) = (
                app.selected_video().cloned(),
                app.selected_chapter().cloned(),
            ) else {
                return false;
            };
            if app.cued_video.as_deref() == Some(video.youtube_id.as_str()) {
                app.player.seek_to(chapter.timestamp);
            } else {
                app.player.cue(&video.youtube_id, Some(chapter.timestamp));
                app.cued_video = Some(video.youtube_id.clone());
            }
            app.ui.status_message = format!("{} @ {}", chapter.title, chapter.timestamp_label());
            true
        }
        Pane::Channels => false,
    }
}

/// Prefetch the child collections the new selection will need, without
/// blocking the event handler.
pub fn request_missing_collections(app: &mut App, task_sender: &mpsc::Sender<Task>) {
    let selection = app.selection();

    if let Some(channel) = selection.channel {
        if !app.queries.has_videos(channel) {
            send_task(app, task_sender, Task::LoadVideos { channel_id: channel });
        }
    }
    if let Some(video) = selection.video {
        if !app.queries.has_chapters(video) {
            send_task(app, task_sender, Task::LoadChapters { video_id: video });
        }
    }
}

fn send_task(app: &mut App, task_sender: &mpsc::Sender<Task>, task: Task) {
    if let Err(e) = task_sender.try_send(task) {
        app.ui.status_message = format!("Failed to queue fetch: {}", e);
    } else {
        app.ui.is_loading = true;
    }
}

fn handle_omnibar_key(app: &mut App, code: KeyCode, task_sender: &mpsc::Sender<Task>) -> bool {
    match code {
        KeyCode::Esc => {
            app.ui.omnibar_open = false;
            app.ui.omnibar_query.clear();
            true
        }
        KeyCode::Enter => {
            let jumped = jump_to_best_match(app);
            if jumped {
                request_missing_collections(app, task_sender);
            }
            app.ui.omnibar_open = false;
            app.ui.omnibar_query.clear();
            true
        }
        KeyCode::Backspace => {
            app.ui.omnibar_query.pop();
            true
        }
        KeyCode::Char(c) => {
            app.ui.omnibar_query.push(c);
            true
        }
        _ => false,
    }
}

enum Jump {
    Channel(Id),
    Video(Id),
}

/// Fuzzy-match the omnibar query against channel titles and, when a
/// channel is selected, its video titles; jump to the best hit.
fn jump_to_best_match(app: &mut App) -> bool {
    let query = app.ui.omnibar_query.trim().to_string();
    if query.is_empty() {
        return false;
    }

    let matcher = SkimMatcherV2::default();
    let mut best: Option<(i64, Jump)> = None;

    if let Some(channels) = app.queries.channels() {
        for channel in channels {
            if let Some(score) = matcher.fuzzy_match(&channel.title, &query) {
                if best.as_ref().map(|(s, _)| score > *s).unwrap_or(true) {
                    best = Some((score, Jump::Channel(channel.id)));
                }
            }
        }
    }

    if let Some(channel) = app.selection().channel {
        if let Some(videos) = app.queries.videos(channel) {
            for video in videos {
                if let Some(score) = matcher.fuzzy_match(&video.title, &query) {
                    if best.as_ref().map(|(s, _)| score > *s).unwrap_or(true) {
                        best = Some((score, Jump::Video(video.id)));
                    }
                }
            }
        }
    }

    match best {
        Some((_, Jump::Channel(id))) => {
            app.store.select_channel(id);
            true
        }
        Some((_, Jump::Video(id))) => {
            app.store.select_video(id);
            true
        }
        None => {
            app.ui.status_message = format!("No match for '{}'", query);
            false
        }
    }
}
