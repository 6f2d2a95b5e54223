//! Center panel: cover art + artist/title of the loaded set.

use iced::widget::{column, container, text};
use iced::{Alignment, Length};

use super::super::state::{Message, OsuRadio};
use super::constants::COVER_BIG;
use super::widgets::cover_thumb;

pub(crate) fn build_now_playing(state: &OsuRadio) -> iced::widget::Container<'_, Message> {
    let Some(now) = &state.now_playing else {
        let hint = if state.loading {
            "Loading beatmap..."
        } else if state.sets.is_empty() {
            "Pick your osu! Songs folder to get started."
        } else {
            "Select a beatmap set to start listening."
        };

        return container(text(hint).size(16))
            .center_x(Length::Fill)
            .center_y(Length::Fill);
    };

    let col = column![
        cover_thumb(now.cover.as_ref(), COVER_BIG),
        text(&now.descriptor.title).size(24),
        text(&now.descriptor.artist).size(16),
        text(&now.set_name).size(12),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    container(col)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(12)
}
