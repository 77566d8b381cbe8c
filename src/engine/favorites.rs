//! Favorite toggler.
//!
//! Flips `highlighted` and mirrors it on the display. Never reads or writes
//! stock, never fails.

use crate::bridge::RenderSink;
use crate::types::FlavorRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteToggler {
    toggles: u64,
}

impl FavoriteToggler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `record`'s favorite flag and render it. Returns the new value.
    pub fn toggle_highlight<S>(&mut self, record: &mut FlavorRecord, sink: &mut S) -> bool
    where
        S: RenderSink + ?Sized,
    {
        let highlighted = record.flip_highlight();
        self.toggles += 1;
        sink.render_highlight(record.display(), highlighted);
        log::debug!("{} highlighted: {}", record.name(), highlighted);
        highlighted
    }

    /// Toggles applied so far.
    #[inline]
    pub fn toggles(&self) -> u64 {
        self.toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{RecordingSink, RenderUpdate};
    use crate::types::{DisplayRef, FlavorId};
    use rust_decimal::Decimal;

    #[test]
    fn test_toggle_twice_restores() {
        let display = DisplayRef::from_raw(2);
        let mut record = FlavorRecord::new(FlavorId::new(0), "Mint", "", Decimal::ONE, 4, display);
        let mut sink = RecordingSink::default();
        let mut favorites = FavoriteToggler::new();

        assert!(favorites.toggle_highlight(&mut record, &mut sink));
        assert!(!favorites.toggle_highlight(&mut record, &mut sink));
        assert!(!record.is_highlighted());
        assert_eq!(record.quantity(), 4);
        assert_eq!(favorites.toggles(), 2);
        assert_eq!(
            sink.updates,
            vec![
                RenderUpdate::Highlight(display, true),
                RenderUpdate::Highlight(display, false)
            ]
        );
    }
}
