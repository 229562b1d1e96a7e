//! The drawer state machine.
//!
//! [`PanelStack`] owns the single process-wide drawer slot. It is a thin
//! state container over a `tokio::sync::watch` channel: every transition
//! publishes a fresh [`StackSnapshot`] and every subscriber sees the same
//! value. Cloning a `PanelStack` yields another handle to the same slot.

use std::sync::Arc;
use tokio::sync::watch;

use super::request::PanelRequest;

/// Either no drawer, or exactly one open drawer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelStackState {
    #[default]
    Closed,
    Open(PanelRequest),
}

impl PanelStackState {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelStackState::Open(_))
    }

    pub fn request(&self) -> Option<&PanelRequest> {
        match self {
            PanelStackState::Open(request) => Some(request),
            PanelStackState::Closed => None,
        }
    }
}

/// What caused the latest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// No transition yet.
    Initial,
    /// A request was opened directly (fresh or drill-in).
    Opened,
    /// A history entry was restored.
    WentBack,
    Closed,
}

/// The published value: state plus the transition that produced it.
///
/// `generation` increases by one on every transition and identifies a
/// particular drawer instance for deferred work.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSnapshot {
    pub state: PanelStackState,
    pub navigation: Navigation,
    pub generation: u64,
}

impl Default for StackSnapshot {
    fn default() -> Self {
        Self {
            state: PanelStackState::Closed,
            navigation: Navigation::Initial,
            generation: 0,
        }
    }
}

/// Handle to the shared drawer slot.
#[derive(Debug, Clone)]
pub struct PanelStack {
    tx: Arc<watch::Sender<StackSnapshot>>,
}

impl Default for PanelStack {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelStack {
    /// Create a closed stack.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StackSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    /// Show `request`, replacing whatever is open.
    ///
    /// History is taken verbatim from the request; nothing is appended.
    pub fn open(&self, request: PanelRequest) {
        tracing::debug!(
            kind = %request.kind,
            depth = request.history.len(),
            "drawer open"
        );
        self.publish(PanelStackState::Open(request), Navigation::Opened);
    }

    /// Close the drawer. Closing a closed drawer changes nothing.
    pub fn close(&self) {
        self.tx.send_if_modified(|snapshot| {
            if !snapshot.state.is_open() {
                return false;
            }
            tracing::debug!(generation = snapshot.generation + 1, "drawer close");
            snapshot.state = PanelStackState::Closed;
            snapshot.navigation = Navigation::Closed;
            snapshot.generation += 1;
            true
        });
    }

    /// Pop one history entry and show it, or close if there is none.
    pub fn go_back(&self) {
        let previous = self.tx.borrow().state.request().and_then(PanelRequest::popped);
        match previous {
            Some(request) => {
                tracing::debug!(
                    kind = %request.kind,
                    depth = request.history.len(),
                    "drawer back"
                );
                self.publish(PanelStackState::Open(request), Navigation::WentBack);
            }
            None => self.close(),
        }
    }

    /// The current state.
    pub fn current(&self) -> PanelStackState {
        self.tx.borrow().state.clone()
    }

    /// The current state together with its transition metadata.
    pub fn snapshot(&self) -> StackSnapshot {
        self.tx.borrow().clone()
    }

    /// A receiver that observes every subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<StackSnapshot> {
        self.tx.subscribe()
    }

    /// Return to the initial closed state. Listeners are notified.
    ///
    /// The generation keeps counting up, so a host that already applied an
    /// earlier generation still sees every later transition.
    pub fn reset(&self) {
        self.tx.send_modify(|snapshot| {
            snapshot.state = PanelStackState::Closed;
            snapshot.navigation = Navigation::Initial;
            snapshot.generation += 1;
        });
    }

    fn publish(&self, state: PanelStackState, navigation: Navigation) {
        self.tx.send_modify(|snapshot| {
            snapshot.state = state;
            snapshot.navigation = navigation;
            snapshot.generation += 1;
        });
    }
}
