use ratatui::style::Color;

pub const COLOR_BAR_BG: Color = Color::Rgb(222, 222, 222);
pub const COLOR_BAR_FG: Color = Color::Rgb(0, 0, 0);
pub const COLOR_TRAIL: Color = Color::Rgb(0, 255, 255);
pub const COLOR_SIZE: Color = Color::Rgb(78, 154, 6);
pub const COLOR_PERCENT: Color = Color::Rgb(255, 255, 255);
pub const COLOR_FOLDER: Color = Color::Rgb(0, 220, 255);
pub const COLOR_FILE: Color = Color::Rgb(220, 220, 220);
pub const COLOR_HELP_TITLE: Color = Color::Rgb(0, 255, 255);
pub const COLOR_HELP_SECTION: Color = Color::Rgb(255, 220, 0);
pub const COLOR_HELP_HINT: Color = Color::Rgb(128, 128, 128);
// Selected row: inverted colors
pub const COLOR_SELECTED_BG: Color = Color::Rgb(255, 255, 255);
pub const COLOR_SELECTED_FG: Color = Color::Rgb(40, 40, 40);
