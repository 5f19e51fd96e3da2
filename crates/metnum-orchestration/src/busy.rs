//! Scoped busy indicator.

use crate::interfaces::BusyIndicator;

/// Shows the indicator on creation and hides it when dropped, so every
/// exit path of an operation clears it.
pub struct BusyGuard<'a> {
    busy: &'a dyn BusyIndicator,
}

impl<'a> BusyGuard<'a> {
    pub fn show(busy: &'a dyn BusyIndicator, message: &str) -> Self {
        busy.show(message);
        Self { busy }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.hide();
    }
}
