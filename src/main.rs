//! osu!radio
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that browses a
//! local folder of osu! beatmap sets, extracts each set's display metadata
//! (artist/title from the `.osu` definition file, cover art, audio track),
//! and plays the audio.
//!
//! # How it fits together
//! Iced is message-based:
//! - `OsuRadio` = the entire memory of the app (all the state)
//! - `Message` = "something happened" (folder picked, set clicked, tick)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//! - `subscription(state)` = periodic tick that drains playback events
//!
//! # Architecture constraints (on purpose)
//! - The UI layer calls `core::*` for listing/resolving/parsing; it performs
//!   no filesystem IO of its own.
//! - `core` has no iced imports; it returns plain data structs and
//!   structured errors.
//! - Disk work and the blocking folder dialog run on worker threads and come
//!   back as Messages, so the UI never freezes.

mod core;
mod gui;

use gui::{OsuRadio, subscription, update, view};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(OsuRadio::default, update, view)
        .title("osu!radio")
        .subscription(subscription)
        .run()
}
