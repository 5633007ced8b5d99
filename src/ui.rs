use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::model::{Id, Keyed};
use crate::selection::Pane;

pub fn draw(frame: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    if app.ui.show_preview {
        constraints.push(Constraint::Length(app.config.layout.preview_height));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(app.config.layout.channel_column_percent),
            Constraint::Percentage(app.config.layout.video_column_percent),
            Constraint::Percentage(app.config.layout.chapter_column_percent),
        ])
        .split(rows[0]);

    draw_channel_column(frame, app, columns[0]);
    draw_video_column(frame, app, columns[1]);
    draw_chapter_column(frame, app, columns[2]);

    if app.ui.show_preview {
        draw_preview(frame, app, rows[1]);
    }

    let bottom = rows[rows.len() - 1];
    if app.ui.omnibar_open {
        draw_omnibar(frame, app, bottom);
    } else {
        draw_status_bar(frame, app, bottom);
    }
}

fn column_block(app: &App, title: &str, pane: Pane) -> Block<'static> {
    let is_active = app.active_pane() == pane;
    let border_style = if is_active {
        Style::default().fg(app.config.colors.active_border)
    } else {
        Style::default().fg(app.config.colors.inactive_border)
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_rows<T, F>(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    block: Block<'static>,
    items: &[T],
    selected: Option<Id>,
    to_line: F,
) where
    T: Keyed,
    F: Fn(&T) -> Line<'static>,
{
    let selected_style = Style::default()
        .fg(app.config.colors.selected_item_fg)
        .bg(app.config.colors.selected_item_bg)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<ListItem> = items.iter().map(|item| ListItem::new(to_line(item))).collect();
    let list = List::new(rows)
        .block(block)
        .highlight_style(selected_style);

    let selected_index = selected.and_then(|id| items.iter().position(|item| item.key() == id));
    let mut list_state = ListState::default();
    list_state.select(selected_index);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_channel_column(frame: &mut Frame, app: &App, area: Rect) {
    let block = column_block(app, "Channels", Pane::Channels);

    let Some(channels) = app.queries.channels() else {
        let paragraph = Paragraph::new("Loading channels...").block(block);
        frame.render_widget(paragraph, area);
        return;
    };
    if channels.is_empty() {
        let paragraph = Paragraph::new("No channels in library").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let title_style = Style::default().fg(app.config.colors.channel_title);
    render_rows(
        frame,
        app,
        area,
        block,
        channels,
        app.selection().channel,
        |channel| Line::from(Span::styled(channel.title.clone(), title_style)),
    );
}

fn draw_video_column(frame: &mut Frame, app: &App, area: Rect) {
    let block = column_block(app, "Videos", Pane::Videos);

    let Some(channel) = app.selection().channel else {
        let paragraph = Paragraph::new("Select a channel").block(block);
        frame.render_widget(paragraph, area);
        return;
    };
    let Some(videos) = app.queries.videos(channel) else {
        let paragraph = Paragraph::new("Loading videos...").block(block);
        frame.render_widget(paragraph, area);
        return;
    };
    if videos.is_empty() {
        let paragraph = Paragraph::new("No videos in this channel").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let title_style = Style::default().fg(app.config.colors.video_title);
    let cued = app.cued_video.clone();
    render_rows(
        frame,
        app,
        area,
        block,
        videos,
        app.selection().video,
        move |video| {
            let marker = if cued.as_deref() == Some(video.youtube_id.as_str()) {
                "▶ "
            } else {
                "  "
            };
            let date = video
                .published_at
                .map(|d| format!(" ({})", d.format("%Y-%m-%d")))
                .unwrap_or_default();
            Line::from(vec![
                Span::raw(marker),
                Span::styled(video.title.clone(), title_style),
                Span::raw(date),
            ])
        },
    );
}

fn draw_chapter_column(frame: &mut Frame, app: &App, area: Rect) {
    let block = column_block(app, "Chapters", Pane::Chapters);

    let Some(video) = app.selection().video else {
        let paragraph = Paragraph::new("Select a video").block(block);
        frame.render_widget(paragraph, area);
        return;
    };
    let Some(chapters) = app.queries.chapters(video) else {
        let paragraph = Paragraph::new("Loading chapters...").block(block);
        frame.render_widget(paragraph, area);
        return;
    };
    if chapters.is_empty() {
        let paragraph = Paragraph::new("No chapters for this video").block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let timestamp_style = Style::default().fg(app.config.colors.chapter_timestamp);
    render_rows(
        frame,
        app,
        area,
        block,
        chapters,
        app.selection().chapter,
        move |chapter| {
            Line::from(vec![
                Span::styled(format!("{:>8} ", chapter.timestamp_label()), timestamp_style),
                Span::raw(chapter.title.clone()),
            ])
        },
    );
}

fn draw_preview(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Preview ").borders(Borders::ALL);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(chapter) = app.selected_chapter() {
        lines.push(Line::from(format!(
            "{} @ {}",
            chapter.title,
            chapter.timestamp_label()
        )));
        if let Some(ref capture) = chapter.capture {
            lines.push(Line::from(format!("capture: {}", capture)));
        }
        if app.ui.show_description {
            if let Some(created) = chapter.created_at {
                lines.push(Line::from(format!("added {}", created.format("%Y-%m-%d"))));
            }
        }
    } else if let Some(video) = app.selected_video() {
        lines.push(Line::from(video.title.clone()));
        lines.push(Line::from(format!("youtube: {}", video.youtube_id)));
        if app.ui.show_description {
            if let Some(published) = video.published_at {
                lines.push(Line::from(format!(
                    "published {}",
                    published.format("%Y-%m-%d")
                )));
            }
        }
    } else {
        lines.push(Line::from("Nothing selected"));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.ui.is_loading {
        format!("Loading... | {}", app.ui.status_message)
    } else {
        app.ui.status_message.clone()
    };

    let help_text = match app.active_pane() {
        Pane::Channels => "↑↓: Channel | →: Drill in | /: Search | q: Quit",
        Pane::Videos => "↑↓: Video | ←→: Out/In | Enter: Play | q: Quit",
        Pane::Chapters => "↑↓: Chapter | ←: Back | Enter: Seek | Space: Pause | q: Quit",
    };

    let status_line = Line::from(vec![
        Span::styled(
            status_text,
            Style::default().fg(app.config.colors.status_bar_fg),
        ),
        Span::raw(" | "),
        Span::styled(help_text, Style::default().fg(ratatui::style::Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(app.config.colors.status_bar_bg));
    frame.render_widget(paragraph, area);
}

fn draw_omnibar(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled("/", Style::default().fg(app.config.colors.active_border)),
        Span::raw(app.ui.omnibar_query.clone()),
        Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    let paragraph =
        Paragraph::new(line).style(Style::default().bg(app.config.colors.status_bar_bg));
    frame.render_widget(paragraph, area);
}
