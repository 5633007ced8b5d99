use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tokio::sync::mpsc;

use clipshelf::app::App;
use clipshelf::async_task::{self, Task, TaskResult};
use clipshelf::cli::{Cli, Commands};
use clipshelf::error::Result;
use clipshelf::player::{self, PlayerCommand, PlayerHandle};
use clipshelf::{event, main_lib, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger only if CLIPSHELF_LOG environment variable is set
    if let Ok(log_file) = std::env::var("CLIPSHELF_LOG") {
        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_file)
                    .expect("Failed to open log file"),
            )))
            .filter_level(log::LevelFilter::Debug)
            .init();

        log::info!("clipshelf starting up");
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_interactive(cli.library).await,
        Commands::Validate => main_lib::validate_library(&cli.library),
    }
}

async fn run_interactive(library_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup async task channels
    let (task_sender, task_receiver) = mpsc::channel::<Task>(32);
    let (result_sender, mut result_receiver) = mpsc::channel::<TaskResult>(32);
    let (player_sender, player_receiver) = mpsc::channel::<PlayerCommand>(32);

    // Start background workers
    let worker_handle = tokio::spawn(async_task::run_worker(
        task_receiver,
        result_sender,
        library_path,
    ));
    let ipc_path = std::env::temp_dir().join(format!("clipshelf-mpv-{}.sock", std::process::id()));
    let player_handle = tokio::spawn(player::run_player(player_receiver, ipc_path));

    let mut app = App::new(PlayerHandle::new(player_sender));
    app.store.subscribe(|selection| {
        log::debug!(
            "selection: channel={:?} video={:?} chapter={:?}",
            selection.channel,
            selection.video,
            selection.chapter
        );
    });

    // Load initial data
    if let Err(e) = task_sender.send(Task::LoadChannels).await {
        app.ui.status_message = format!("Failed to load channels: {}", e);
    }

    // Main application loop
    let tick_rate = Duration::from_millis(250);
    loop {
        // Handle forced screen redraw
        if app.ui.force_redraw {
            terminal.clear()?;
            app.ui.force_redraw = false;
        }

        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if crossterm::event::poll(tick_rate)? {
            let input = crossterm::event::read()?;
            if let Err(e) = event::handle_event(input, &mut app, &task_sender) {
                app.ui.status_message = format!("Error handling event: {}", e);
            }
        }

        // Handle async task results
        while let Ok(result) = result_receiver.try_recv() {
            main_lib::handle_task_result(&mut app, result, &task_sender);
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Cleanup
    worker_handle.abort();
    player_handle.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
