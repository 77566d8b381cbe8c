//! Flavor extraction: product nodes in, catalogue snapshot out.
//!
//! Each product node must carry exactly one name, description, price and
//! quantity field. A node that doesn't is skipped with an
//! [`ExtractionError`] and the rest of the page is still extracted.
//! Records keep document order, so ids follow the order of the
//! well-formed nodes.

use crate::bridge::MarkupSource;
use crate::catalog::{Catalogue, FlavorField};
use crate::error::ExtractionError;
use crate::types::price::parse_price;
use crate::types::DisplayRef;

/// Result of one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Records for every well-formed node
    pub catalogue: Catalogue,

    /// One error per skipped node, in document order
    pub skipped: Vec<ExtractionError>,
}

impl Extraction {
    /// Nodes that produced a record.
    pub fn extracted(&self) -> usize {
        self.catalogue.len()
    }
}

/// Build a catalogue from the current markup.
///
/// Must run after stock seeding: the quantity fields don't exist before it.
pub fn extract_flavors<S>(source: &S) -> Extraction
where
    S: MarkupSource + ?Sized,
{
    let mut extraction = Extraction::default();

    for node in source.flavor_nodes() {
        match read_node(source, node) {
            Ok(fields) => {
                extraction.catalogue.push(
                    fields.name,
                    fields.description,
                    fields.price,
                    fields.quantity,
                    node,
                );
            }
            Err(err) => {
                log::warn!("skipping flavor node: {err}");
                extraction.skipped.push(err);
            }
        }
    }

    log::debug!(
        "extracted {} flavors, skipped {}",
        extraction.extracted(),
        extraction.skipped.len()
    );
    extraction
}

struct NodeFields {
    name: String,
    description: String,
    price: rust_decimal::Decimal,
    quantity: u32,
}

fn read_node<S>(source: &S, node: DisplayRef) -> Result<NodeFields, ExtractionError>
where
    S: MarkupSource + ?Sized,
{
    let name = single_field(source, node, FlavorField::Name)?
        .trim()
        .to_string();
    if name.is_empty() {
        return Err(ExtractionError::EmptyName { node });
    }

    let description = single_field(source, node, FlavorField::Description)?
        .trim()
        .to_string();

    let price_text = single_field(source, node, FlavorField::Price)?;
    let price = parse_price(&price_text).ok_or(ExtractionError::InvalidPrice {
        node,
        text: price_text.clone(),
    })?;

    let quantity_text = single_field(source, node, FlavorField::Quantity)?;
    let quantity = quantity_text
        .trim()
        .parse::<u32>()
        .map_err(|_| ExtractionError::InvalidQuantity {
            node,
            text: quantity_text.clone(),
        })?;

    Ok(NodeFields {
        name,
        description,
        price,
        quantity,
    })
}

fn single_field<S>(source: &S, node: DisplayRef, field: FlavorField) -> Result<String, ExtractionError>
where
    S: MarkupSource + ?Sized,
{
    let mut texts = source.field_texts(node, field);
    match texts.len() {
        0 => Err(ExtractionError::MissingField { node, field }),
        1 => Ok(texts.remove(0)),
        count => Err(ExtractionError::AmbiguousField { node, field, count }),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
