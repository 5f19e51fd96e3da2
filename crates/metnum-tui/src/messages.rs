//! TUI message types (Elm Messages).

use metnum_core::Feature;
use metnum_orchestration::{ChartData, NotificationLevel};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A formatted single-method result for a feature's panel.
    Result { feature: Feature, text: String },
    /// A rendered comparison table.
    Comparison { feature: Feature, text: String },
    /// An error for a feature's panel.
    Error { feature: Feature, message: String },
    /// Chart data from an interpolation.
    Chart(ChartData),
    /// Transient toast.
    Notify {
        level: NotificationLevel,
        message: String,
    },
    /// Show the busy overlay.
    BusyShow(String),
    /// Hide the busy overlay.
    BusyHide,
    /// A worker finished; its view accepts new operations again.
    Finished(Feature),
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Result {
            feature: Feature::Integration,
            text: "Resultado: 1".into(),
        };
        assert!(matches!(msg, TuiMessage::Result { .. }));

        let msg = TuiMessage::Notify {
            level: NotificationLevel::Success,
            message: "ok".into(),
        };
        assert!(matches!(
            msg,
            TuiMessage::Notify {
                level: NotificationLevel::Success,
                ..
            }
        ));

        let msg = TuiMessage::Finished(Feature::Differentiation);
        assert!(matches!(msg, TuiMessage::Finished(Feature::Differentiation)));
    }
}
