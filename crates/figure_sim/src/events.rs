//! Engine-to-host notifications.
//!
//! Events are sent synchronously at the point of change over an unbounded
//! channel, never batched to the end of a tick: a hit registered mid-tick
//! is visible to the receiver before the tick returns. A dropped receiver
//! simply mutes the engine.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::types::FigureState;

/// Notification emitted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
  /// The lifecycle state changed.
  StateChanged(FigureState),
  /// A count the host displays changed: the ensemble size outside the
  /// collection minigame, the collected-so-far count inside it.
  CountChanged(usize),
}

/// Sending half owned by the engine.
#[derive(Clone)]
pub(crate) struct EventTap {
  tx: Sender<EngineEvent>,
}

impl EventTap {
  pub(crate) fn channel() -> (Self, Receiver<EngineEvent>) {
    let (tx, rx) = unbounded();
    (Self { tx }, rx)
  }

  /// Send ignoring a hung-up receiver.
  pub(crate) fn emit(&self, event: EngineEvent) {
    let _ = self.tx.send(event);
  }
}
