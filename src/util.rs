use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// Name of the application's directory under the local data & config
/// directories
const APP_DIR: &str = "gridsnake";

pub(crate) trait EnumExt: Enum + Sized {
    fn iter() -> impl Iterator<Item = Self>;
}

impl<T: Enum> EnumExt for T {
    fn iter() -> impl Iterator<Item = T> {
        (0..T::LENGTH).map(T::from_usize)
    }
}

/// Return a `Rect` of the given size centered inside `area`, shrunk as needed
/// to fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Default location of the high score file
pub(crate) fn high_score_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(APP_DIR).join("highscore.txt"))
}

/// Default location of the log file
pub(crate) fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(APP_DIR).join("gridsnake.log"))
}

/// Default location of the configuration file
pub(crate) fn config_file_path() -> Option<PathBuf> {
    dirs::config_local_dir().map(|p| p.join(APP_DIR).join("config.toml"))
}
