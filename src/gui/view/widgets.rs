//! Reusable small widgets/helpers used across view modules.

use iced::widget::{button, column, container, image, row, slider, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Message, OsuRadio};

fn fmt_duration_ms(ms: u64) -> String {
    let s = ms / 1000;
    let m = s / 60;
    let s = s % 60;
    format!("{m}:{s:02}")
}

pub(crate) fn cover_placeholder(size: f32) -> iced::widget::Container<'static, Message> {
    container(
        column![text("♪").size(28), text("no cover").size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
}

/// If `handle` exists, show it; otherwise show the placeholder.
pub(crate) fn cover_thumb(
    handle: Option<&iced::widget::image::Handle>,
    size: f32,
) -> Element<'static, Message> {
    match handle {
        Some(h) => container(image(h.clone()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => cover_placeholder(size).into(),
    }
}

/// Bottom playback bar: transport buttons, seek slider, volume slider.
///
/// Emits only Messages (no rodio, no decoding).
pub(crate) fn playback_bar(state: &OsuRadio) -> iced::widget::Container<'_, Message> {
    let play_label = if state.is_playing { "Pause" } else { "Play" };

    let play_btn = button(play_label).on_press(Message::TogglePlayPause);
    let stop_btn = button("Stop").on_press(Message::Stop);
    let shuffle_btn = button("Shuffle").on_press(Message::Shuffle);

    // --- seek slider (ratio 0..=1, preview while dragging) ---
    let pos = state.position_ms;
    let dur = state.duration_ms.unwrap_or(0);

    let ratio = state.seek_preview_ratio.unwrap_or(if dur > 0 {
        (pos as f32 / dur as f32).clamp(0.0, 1.0)
    } else {
        0.0
    });

    let seek = slider(0.0..=1.0, ratio, Message::SeekTo)
        .on_release(Message::SeekCommit)
        .width(Length::Fill);

    let time_text = if dur > 0 {
        format!("{} / {}", fmt_duration_ms(pos), fmt_duration_ms(dur))
    } else {
        format!("{} / -:--", fmt_duration_ms(pos))
    };

    // --- volume slider ---
    let vol = state.volume.clamp(0.0, 1.0);
    let vol_slider = slider(0.0..=1.0, vol, Message::SetVolume).width(Length::Fixed(140.0));

    // --- now playing label ---
    let now_playing = match &state.now_playing {
        Some(now) => format!("{} - {}", now.descriptor.artist, now.descriptor.title),
        None => "Nothing playing".to_string(),
    };

    let bar = row![
        row![play_btn, stop_btn, shuffle_btn]
            .spacing(8)
            .align_y(Alignment::Center),
        column![
            text(now_playing).size(14),
            row![seek, text(time_text).size(12)]
                .spacing(10)
                .align_y(Alignment::Center),
        ]
        .spacing(6)
        .width(Length::Fill),
        row![text("Vol").size(12), vol_slider]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(bar).padding(12)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fmt_duration_ms;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(fmt_duration_ms(0), "0:00");
        assert_eq!(fmt_duration_ms(59_999), "0:59");
        assert_eq!(fmt_duration_ms(61_000), "1:01");
        assert_eq!(fmt_duration_ms(600_000), "10:00");
    }
}
