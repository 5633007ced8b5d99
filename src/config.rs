use ratatui::style::Color;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub colors: ColorConfig,
    pub layout: LayoutConfig,
    pub keybindings: KeybindingConfig,
}

#[derive(Debug, Clone)]
pub struct ColorConfig {
    pub active_border: Color,
    pub inactive_border: Color,
    pub selected_item_fg: Color,
    pub selected_item_bg: Color,
    pub channel_title: Color,
    pub video_title: Color,
    pub chapter_timestamp: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub channel_column_percent: u16,
    pub video_column_percent: u16,
    pub chapter_column_percent: u16,
    pub preview_height: u16,
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub quit: char,
    pub play_pause: char,
    pub fast_forward: char,
    pub rewind: char,
    pub toggle_preview: char,
    pub toggle_description: char,
    pub omnibar: char,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active_border: Color::Yellow,
            inactive_border: Color::White,
            selected_item_fg: Color::Black,
            selected_item_bg: Color::White,
            channel_title: Color::Cyan,
            video_title: Color::Reset,
            chapter_timestamp: Color::Blue,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            channel_column_percent: 25,
            video_column_percent: 35,
            chapter_column_percent: 40,
            preview_height: 6,
        }
    }
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: 'q',
            play_pause: ' ',
            fast_forward: '.',
            rewind: ',',
            toggle_preview: 'p',
            toggle_description: 'd',
            omnibar: '/',
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::default()
    }
}
