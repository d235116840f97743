//! Display surface backed by a watch channel

use tokio::sync::watch;
use tracing::warn;

use crate::{state::DisplayView, timer::Display};

/// Publishes every rendered view so readers always see the latest one
#[derive(Debug)]
pub struct WatchDisplay {
    tx: watch::Sender<DisplayView>,
}

impl WatchDisplay {
    /// Create the display together with a receiver for its views
    pub fn channel() -> (Self, watch::Receiver<DisplayView>) {
        let (tx, rx) = watch::channel(DisplayView::default());
        (Self { tx }, rx)
    }
}

impl Display for WatchDisplay {
    fn render(&mut self, view: &DisplayView) {
        if let Err(e) = self.tx.send(view.clone()) {
            warn!("Failed to publish display view: {}", e);
        }
    }
}
