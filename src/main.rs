//! Flavor Catalog - demo binary
//!
//! Builds the shop page, starts a session and replays a few user events.
//! Set `RUST_LOG=debug` to see every accepted order and toggle.

use std::process::ExitCode;

use flavor_catalog::page::{FlavorMarkup, Page, ShopBuilder};
use flavor_catalog::{CatalogConfig, Event, EventOutcome, Session};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("===========================================");
    println!("  Flavor Catalog");
    println!("===========================================");
    println!();

    let config = CatalogConfig::default();
    let tree = match ShopBuilder::new()
        .flavor(FlavorMarkup::new("Vanilla", "Madagascar bourbon bean", "$1.00"))
        .flavor(FlavorMarkup::new("Mint Chip", "Fresh mint, dark chocolate", "$1.25"))
        .flavor(FlavorMarkup::new("Rocky Road", "Marshmallow and almonds", "$2.75"))
        .flavor(FlavorMarkup::new("Pistachio", "Roasted Sicilian pistachio", "$3.50"))
        .build()
    {
        Ok(tree) => tree,
        Err(err) => {
            log::error!("could not build page: {err}");
            return ExitCode::FAILURE;
        }
    };

    let page = match Page::from_config(tree, &config) {
        Ok(page) => page,
        Err(err) => {
            log::error!("bad layout: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::start(page, config, &mut rand::thread_rng()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("bad configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Stock:");
    for record in session.catalogue() {
        println!(
            "  [{}] {:<12} ${}  x{}",
            record.id(),
            record.name(),
            flavor_catalog::types::price::format_price(record.price()),
            record.quantity()
        );
    }
    println!();

    // Order two of the first flavor, then something absurd, then favorite it
    let first = session.catalogue().records().first().map(|r| (r.id(), r.display()));
    if let Some((id, display)) = first {
        let page = session.bridge_mut();
        let filled = page
            .choose_flavor(id.to_string())
            .and_then(|_| page.enter_amount("2"));
        if let Err(err) = filled {
            log::error!("order form unavailable: {err}");
            return ExitCode::FAILURE;
        }
        report(session.dispatch(Event::SubmitOrder));

        if let Err(err) = session.bridge_mut().enter_amount("1000") {
            log::error!("order form unavailable: {err}");
            return ExitCode::FAILURE;
        }
        report(session.dispatch(Event::SubmitOrder));
        report(session.dispatch(Event::Click(display)));
    }

    println!();
    println!(
        "Orders: {} accepted, {} rejected, {} units sold",
        session.orders().accepted(),
        session.orders().rejected(),
        session.orders().units_sold()
    );
    println!("Units left: {}", session.catalogue().total_stock());
    let favorites: Vec<_> = session.catalogue().highlighted().map(|r| r.name()).collect();
    println!("Favorites: {}", favorites.join(", "));
    ExitCode::SUCCESS
}

fn report(outcome: EventOutcome) {
    match outcome {
        EventOutcome::Ordered(receipt) => {
            println!("  ordered {} of #{}, {} left", receipt.amount, receipt.flavor, receipt.remaining)
        }
        EventOutcome::Rejected(err) => println!("  rejected: {err}"),
        EventOutcome::Toggled { flavor, highlighted } => {
            println!("  #{flavor} highlighted: {highlighted}")
        }
        EventOutcome::Ignored => println!("  click ignored"),
    }
}
