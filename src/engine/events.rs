//! Explicit subscription channels for theme changes.
//!
//! ```text
//! recheck ──► EventBus ──┬──► on_bindings_changed() receivers
//!                        └──► on_family_changed()   receivers
//! ```
//!
//! Each subscriber gets its own unbounded `async_channel`. Subscribers whose
//! receiver was dropped are pruned on the next publish.

use async_channel::{Receiver, Sender};
use recursica_types::Mode;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEvent {
    /// Custom property bindings were rewritten.
    BindingsChanged { names: Vec<String> },
    /// A palette family's levels were recomputed.
    FamilyChanged { family: String, mode: Mode },
}

/// Subscriber lists for the two event streams.
#[derive(Debug, Default)]
pub struct EventBus {
    bindings: Mutex<Vec<Sender<ThemeEvent>>>,
    families: Mutex<Vec<Sender<ThemeEvent>>>,
}

fn subscribe(list: &Mutex<Vec<Sender<ThemeEvent>>>) -> Receiver<ThemeEvent> {
    let (tx, rx) = async_channel::unbounded();
    list.lock().unwrap_or_else(PoisonError::into_inner).push(tx);
    rx
}

fn broadcast(list: &Mutex<Vec<Sender<ThemeEvent>>>, event: &ThemeEvent) -> usize {
    let mut senders = list.lock().unwrap_or_else(PoisonError::into_inner);
    senders.retain(|tx| tx.try_send(event.clone()).is_ok());
    senders.len()
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_bindings_changed(&self) -> Receiver<ThemeEvent> {
        subscribe(&self.bindings)
    }

    pub fn on_family_changed(&self) -> Receiver<ThemeEvent> {
        subscribe(&self.families)
    }

    /// Sends `event` to the matching stream. Returns the number of live subscribers reached.
    pub fn publish(&self, event: ThemeEvent) -> usize {
        match &event {
            ThemeEvent::BindingsChanged { .. } => broadcast(&self.bindings, &event),
            ThemeEvent::FamilyChanged { .. } => broadcast(&self.families, &event),
        }
    }
}
