use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space rectangle a widget occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, event: &PointerEvent) -> bool {
        event.x >= self.x
            && event.x <= self.x + self.width
            && event.y >= self.y
            && event.y <= self.y + self.height
    }
}

/// Document-level pointer-down bus.
#[derive(Debug, Clone)]
pub struct PointerEvents {
    tx: broadcast::Sender<PointerEvent>,
}

impl Default for PointerEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn dispatch(&self, event: PointerEvent) {
        // No listeners is the common case.
        let _ = self.tx.send(event);
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn subscribe(&self) -> PointerSubscription {
        debug!("Pointer listener registered");
        PointerSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Live listener registration. Dropping it unregisters the listener.
#[derive(Debug)]
pub struct PointerSubscription {
    rx: broadcast::Receiver<PointerEvent>,
}

impl PointerSubscription {
    /// Events received since the last call, oldest first.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Pointer listener lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        events
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        debug!("Pointer listener removed");
    }
}
