//! Event dispatch: turns user events into processor calls.
//!
//! Events are handled one at a time, in the order they are dispatched, and
//! each runs to completion. Order events are totally ordered per record.
//! Clicks touch `highlighted` only, so they commute with orders.

use crate::bridge::PresentationBridge;
use crate::engine::Session;
use crate::error::OrderError;
use crate::types::{DisplayRef, FlavorId, OrderReceipt};

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The order form's submit control fired
    SubmitOrder,
    /// A display node was clicked
    Click(DisplayRef),
}

/// What handling an [`Event`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Ordered(OrderReceipt),
    Rejected(OrderError),
    Toggled { flavor: FlavorId, highlighted: bool },
    /// Click outside every product node
    Ignored,
}

impl EventOutcome {
    /// Message suitable for showing the user, if any.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            EventOutcome::Rejected(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

impl<B: PresentationBridge> Session<B> {
    /// Handle one event.
    pub fn dispatch(&mut self, event: Event) -> EventOutcome {
        match event {
            Event::SubmitOrder => match self.submit_order() {
                Ok(receipt) => EventOutcome::Ordered(receipt),
                Err(err) => EventOutcome::Rejected(err),
            },
            Event::Click(target) => match self.click(target) {
                Some((flavor, highlighted)) => EventOutcome::Toggled {
                    flavor,
                    highlighted,
                },
                None => EventOutcome::Ignored,
            },
        }
    }

    /// Handle events in order, collecting outcomes.
    pub fn dispatch_all<I>(&mut self, events: I) -> Vec<EventOutcome>
    where
        I: IntoIterator<Item = Event>,
    {
        events.into_iter().map(|event| self.dispatch(event)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FlavorField;
    use crate::config::CatalogConfig;
    use crate::page::{FlavorMarkup, Page, ShopBuilder};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> Session<Page> {
        let config = CatalogConfig::default();
        let tree = ShopBuilder::new()
            .flavor(FlavorMarkup::new("Vanilla", "Bean", "$1.00"))
            .flavor(FlavorMarkup::new("Mint", "Leaf", "$2.00"))
            .build()
            .unwrap();
        let page = Page::from_config(tree, &config).unwrap();
        Session::start(page, config, &mut ChaCha8Rng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn test_click_on_child_toggles_parent_flavor() {
        let mut s = session();
        let mint = s.catalogue().records()[1].display();
        let heading = s
            .bridge()
            .tree()
            .select_first(mint, s.bridge().layout().field(FlavorField::Name))
            .unwrap();

        let outcome = s.dispatch(Event::Click(heading));
        assert_eq!(
            outcome,
            EventOutcome::Toggled {
                flavor: FlavorId::new(1),
                highlighted: true
            }
        );
        assert!(s.bridge().is_highlighted(mint));
        assert!(s.catalogue().records()[1].is_highlighted());
        assert!(!s.catalogue().records()[0].is_highlighted());
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut s = session();
        let root = s.bridge().tree().root();
        assert_eq!(s.dispatch(Event::Click(root)), EventOutcome::Ignored);
        assert_eq!(s.favorites().toggles(), 0);
    }

    #[test]
    fn test_rejected_order_has_diagnostic() {
        let mut s = session();
        s.bridge_mut().enter_amount("lots").unwrap();
        let outcome = s.dispatch(Event::SubmitOrder);
        assert_eq!(
            outcome.diagnostic().as_deref(),
            Some("amount \"lots\" is not a whole number")
        );
    }

    #[test]
    fn test_dispatch_all_keeps_order() {
        let mut s = session();
        let vanilla = s.catalogue().records()[0].display();
        s.bridge_mut().choose_flavor("0").unwrap();
        s.bridge_mut().enter_amount("0").unwrap();

        let outcomes = s.dispatch_all([
            Event::Click(vanilla),
            Event::SubmitOrder,
            Event::Click(vanilla),
        ]);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], EventOutcome::Toggled { highlighted: true, .. }));
        assert!(matches!(outcomes[1], EventOutcome::Ordered(_)));
        assert!(matches!(outcomes[2], EventOutcome::Toggled { highlighted: false, .. }));
    }
}
