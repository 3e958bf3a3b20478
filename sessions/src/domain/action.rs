//! The result channel: a tri-state-plus-loading sum type and its stream.
//!
//! Gateway operations report progress and outcome through [`Action`] values
//! instead of throwing across the boundary. Streaming operations hand back an
//! [`ActionStream`] whose first item is always [`Action::Loading`], followed
//! by exactly one terminal item.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;

use super::status::StatusCode;
use super::user::User;

/// One emission from a gateway operation.
///
/// `Success(None)` is a valid outcome (the remote reported success without a
/// user payload) and is distinct from `Empty`, which means "nothing to report
/// but not an error" — e.g. email verification is still outstanding. `Error`
/// carries a human-readable message only; no variant carries a backtrace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<T> {
    /// The operation started and is still working.
    Loading,
    /// Terminal: the remote reported success, with an optional payload.
    Success(T),
    /// Terminal: no payload and no error, optionally tagged with the remote
    /// status code that produced it.
    Empty(Option<StatusCode>),
    /// Terminal: the operation failed; the message is the only payload.
    Error(String),
}

/// The action type produced by session gateway operations.
pub type SessionAction = Action<Option<User>>;

impl<T> Action<T> {
    /// Whether this emission ends the operation.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Ordered emissions of one streaming gateway operation.
///
/// The `Loading` item is queued synchronously before the constructor returns;
/// the terminal item is produced by a spawned task so the network call never
/// runs on the caller's poll path. Dropping the stream abandons the call:
/// the task's terminal send fails silently and nothing is retried.
#[derive(Debug)]
pub struct ActionStream<T = Option<User>> {
    rx: mpsc::Receiver<Action<T>>,
}

impl<T: Send + 'static> ActionStream<T> {
    /// Emit `Loading`, then run `call` on a spawned task and emit its result.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime context, as the terminal
    /// value is produced on a spawned task.
    pub fn spawn<F>(call: F) -> Self
    where
        F: Future<Output = Action<T>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(2);
        // Capacity covers Loading plus one terminal item, so neither send
        // can block and Loading is queued before the stream is returned.
        let _ = tx.try_send(Action::Loading);
        tokio::spawn(async move {
            let terminal = call.await;
            // The receiver may already be gone; abandoned calls never
            // deliver their terminal emission.
            let _ = tx.send(terminal).await;
        });
        Self { rx }
    }
}

impl<T> ActionStream<T> {
    /// Receive the next emission, or `None` once the operation finished.
    pub async fn next_action(&mut self) -> Option<Action<T>> {
        self.rx.recv().await
    }
}

impl<T> Stream for ActionStream<T> {
    type Item = Action<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn loading_arrives_first_then_exactly_one_terminal() {
        let mut stream: ActionStream<Option<User>> =
            ActionStream::spawn(async { Action::Empty(Some(StatusCode::new(101))) });

        assert_eq!(stream.next().await, Some(Action::Loading));
        assert_eq!(
            stream.next().await,
            Some(Action::Empty(Some(StatusCode::new(101))))
        );
        assert_eq!(stream.next().await, None, "stream must end after terminal");
    }

    #[tokio::test]
    async fn loading_is_queued_before_the_call_runs() {
        // The call future is never polled before the first item is taken,
        // yet Loading must already be buffered when the stream is returned.
        let mut stream: ActionStream<Option<User>> =
            ActionStream::spawn(async { Action::Success(None) });
        let first = stream
            .next_action()
            .await
            .expect("stream yields at least one item");
        assert_eq!(first, Action::Loading);
    }

    #[tokio::test]
    async fn dropped_stream_abandons_delivery() {
        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        let stream: ActionStream<Option<User>> = ActionStream::spawn(async move {
            let _ = done_tx.send(());
            Action::Success(None)
        });
        drop(stream);
        // The spawned call still runs to completion even though nobody is
        // listening for its terminal emission.
        done_rx.await.expect("call should have run");
    }

    #[test]
    fn loading_is_the_only_non_terminal_variant() {
        assert!(!Action::<Option<User>>::Loading.is_terminal());
        assert!(Action::<Option<User>>::Success(None).is_terminal());
        assert!(Action::<Option<User>>::Empty(None).is_terminal());
        assert!(Action::<Option<User>>::Error("boom".to_owned()).is_terminal());
    }
}
