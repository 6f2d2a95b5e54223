//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod now_playing;
mod sidebar;
mod widgets;

use iced::Length;
use iced::widget::{Column, column, row};

use super::state::{Message, OsuRadio};
use constants::{PLAYBACK_H, SIDEBAR_W};

pub(crate) fn view(state: &OsuRadio) -> Column<'_, Message> {
    let sidebar = sidebar::build_sidebar(state).width(Length::Fixed(SIDEBAR_W));
    let main = now_playing::build_now_playing(state).width(Length::Fill);

    let body = row![sidebar, main].spacing(12).height(Length::Fill);
    let playback = widgets::playback_bar(state).height(Length::Fixed(PLAYBACK_H));

    column![body, playback].spacing(12).padding(12)
}
