use crate::catalog::QueryCache;
use crate::config::Config;
use crate::model::{Chapter, Video};
use crate::player::PlayerHandle;
use crate::selection::{Pane, Selection, SelectionStore};

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub status_message: String,
    pub is_loading: bool,
    pub force_redraw: bool,
    pub omnibar_open: bool,
    pub omnibar_query: String,
    pub show_preview: bool,
    pub show_description: bool,
}

pub struct App {
    pub store: SelectionStore,
    pub queries: QueryCache,
    pub player: PlayerHandle,
    pub config: Config,
    pub ui: UiState,
    pub should_quit: bool,
    /// Youtube id currently loaded in the external player, if any.
    pub cued_video: Option<String>,
}

impl App {
    pub fn new(player: PlayerHandle) -> Self {
        Self {
            store: SelectionStore::new(),
            queries: QueryCache::new(),
            player,
            config: Config::load(),
            ui: UiState {
                status_message: "Loading library...".to_string(),
                is_loading: true,
                ..UiState::default()
            },
            should_quit: false,
            cued_video: None,
        }
    }

    pub fn selection(&self) -> Selection {
        self.store.selection()
    }

    pub fn active_pane(&self) -> Pane {
        self.store.selection().active_pane()
    }

    /// The fully resolved selected video row, if its collection is cached.
    pub fn selected_video(&self) -> Option<&Video> {
        let selection = self.selection();
        self.queries
            .video_by_id(selection.channel?, selection.video?)
    }

    /// The fully resolved selected chapter row, if its collection is cached.
    pub fn selected_chapter(&self) -> Option<&Chapter> {
        let selection = self.selection();
        self.queries
            .chapter_by_id(selection.video?, selection.chapter?)
    }
}
