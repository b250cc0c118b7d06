use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

// Define the various events that can occur in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    ProductCreated {
        product_id: i32,
        product_name: String,
    },
    GoodsReceived {
        entry_id: i32,
        product_name: String,
    },
    SaleRecorded {
        entry_id: i32,
        product_name: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Creates a bounded event channel. The receiver side is handed to the
/// presentation layer; delivery is best-effort and a full or closed channel
/// never fails a store operation.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}
