//! Modern layout: sidebar + track table + bottom now-playing bar.

use iced::Length;
use iced::widget::{Column, column, row};

use super::super::state::{Message, Resona};
use super::constants::SIDEBAR_W;

mod center;
mod now_playing;
mod sidebar;

pub(crate) fn view(state: &Resona) -> Column<'_, Message> {
    let sidebar = sidebar::build_sidebar(state).width(Length::Fixed(SIDEBAR_W));
    let main = center::build_center(state).width(Length::Fill);

    let body = row![sidebar, main].spacing(12).height(Length::Fill);
    let bar = now_playing::build_bar(state);

    column![body, bar].spacing(12).padding(12)
}
