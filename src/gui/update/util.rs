//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run a blocking function on a background thread and await the result.
///
/// Every "do work off-thread, then emit Message::Finished(...)" case in this
/// app goes through here instead of repeating the oneshot + thread dance.
pub(crate) async fn spawn_blocking<T>(f: impl FnOnce() -> T + Send + 'static) -> T
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<T>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .expect("background worker dropped without returning")
}
