//! gui/subscription.rs
//! Poll playback events by emitting a periodic TickPlayback message.

use std::time::Duration;

use iced::{Subscription, time};

use super::state::{Message, OsuRadio};

pub(crate) fn subscription(state: &OsuRadio) -> Subscription<Message> {
    if state.playback_events.is_none() {
        return Subscription::none();
    }

    time::every(Duration::from_millis(200)).map(|_| Message::TickPlayback)
}
