//! Left sidebar (folder pick + beatmap set list).

use iced::widget::{button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Message, OsuRadio};
use super::constants::{ROW_TEXT, SET_LIST_SPACING, SET_ROW_H, SET_ROW_HPAD, SET_ROW_VPAD};

pub(crate) fn build_sidebar(state: &OsuRadio) -> iced::widget::Container<'_, Message> {
    let pick_btn = if state.picking {
        button("Picking...")
    } else {
        button("Pick osu! Songs Folder").on_press(Message::PickFolder)
    };

    let root_label = match &state.songs_root {
        Some(root) => text(root.display().to_string()).size(12),
        None => text("No folder picked yet.").size(12),
    };

    let col = column![
        text("osu!radio").size(20),
        text(&state.status).size(12),
        pick_btn,
        root_label,
        text("Beatmap sets").size(16),
        build_set_list(state).height(Length::Fill),
    ]
    .spacing(12);

    container(col).padding(12)
}

fn build_set_list(state: &OsuRadio) -> iced::widget::Scrollable<'_, Message> {
    let mut col = column![].spacing(SET_LIST_SPACING);

    for (i, name) in state.sets.iter().enumerate() {
        let marker = if state.selected == Some(i) { "▶" } else { "" };

        let cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(20.0)),
            text(name).size(ROW_TEXT).width(Length::Fill),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(cells)
                .padding([SET_ROW_VPAD, SET_ROW_HPAD])
                .height(Length::Fixed(SET_ROW_H))
                .width(Length::Fill),
        )
        .on_press(Message::SelectSet(i));

        col = col.push(row_widget);
    }

    scrollable(col).height(Length::Fill)
}
