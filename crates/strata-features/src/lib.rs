//! Landing-page feature grid layout.
//!
//! A feature card presents one product capability (icon, title, rich
//! description). [`render_features`] maps an ordered card list onto a
//! 12-column grid layout. It is a pure function: no state, no I/O, equal
//! inputs produce structurally equal trees. The icon reference and
//! description markup are opaque payloads carried through unchanged.

use serde::{Deserialize, Serialize};

/// Opaque reference to a graphical asset (a path or symbolic name).
/// Never interpreted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque pre-rendered markup fragment. Never interpreted by this crate;
/// the template layer emits it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(pub String);

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One landing-page feature card, declared in site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub icon: IconRef,
    /// Rich description, an opaque markup payload.
    pub body: Markup,
}

/// A positioned cell of the rendered feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Cell width in a 12-column grid.
    pub span: u8,
    pub icon: IconRef,
    pub title: String,
    pub body: Markup,
}

/// Grid layout for the landing-page feature section. One cell per input
/// card, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LayoutTree {
    pub cells: Vec<GridCell>,
}

impl LayoutTree {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Map an ordered list of feature cards onto a grid layout.
///
/// Total over its input: an empty list yields an empty grid, never an
/// error. Each cell carries its card's icon, title and body unchanged.
/// The column span depends only on the total card count, so four or more
/// cards form rows of four and shorter lists widen to fill the row.
pub fn render_features(cards: &[FeatureCard]) -> LayoutTree {
    let span = column_span(cards.len());

    LayoutTree {
        cells: cards
            .iter()
            .map(|card| GridCell {
                span,
                icon: card.icon.clone(),
                title: card.title.clone(),
                body: card.body.clone(),
            })
            .collect(),
    }
}

/// Cell width for a given card count: 12/count, capped to [3, 12].
fn column_span(count: usize) -> u8 {
    match count {
        0 | 1 => 12,
        2 => 6,
        3 => 4,
        _ => 3,
    }
}
