//! Grid container abstraction
//!
//! The pipeline never touches a document directly. It appends cards to,
//! and toggles visibility on, whatever implements [`Container`]: the
//! in-memory tree below for tests and server rendering, or a reactive
//! model in the browser app.

use crate::card::{html_escape, RenderedCard};

/// Element id of the grid container in the page
pub const GRID_ID: &str = "servicesGrid";

/// CSS class of the "no results" placeholder
pub const PLACEHOLDER_CLASS: &str = "no-results";

/// A handle on the element that holds the cards and the placeholder
pub trait Container {
    /// Append a card as the last child
    fn append_card(&mut self, card: RenderedCard);

    fn card_count(&self) -> usize;

    /// The card at `index` in document order
    fn card(&self, index: usize) -> Option<&RenderedCard>;

    fn set_hidden(&mut self, index: usize, hidden: bool);

    fn is_hidden(&self, index: usize) -> bool;

    /// Remove every placeholder currently present
    fn remove_placeholder(&mut self);

    /// Append a placeholder as the last child
    fn append_placeholder(&mut self, text: &str);

    fn placeholder_count(&self) -> usize;
}

/// A child of the in-memory grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Card { card: RenderedCard, hidden: bool },
    Placeholder { text: String },
}

/// Headless grid: an ordered list of child nodes
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    children: Vec<Node>,
    /// Index into `children` of each card, in document order
    card_positions: Vec<usize>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Cards in document order, paired with their hidden flag
    pub fn cards(&self) -> impl Iterator<Item = (&RenderedCard, bool)> + '_ {
        self.children.iter().filter_map(|node| match node {
            Node::Card { card, hidden } => Some((card, *hidden)),
            Node::Placeholder { .. } => None,
        })
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            Node::Placeholder { text } => Some(text.as_str()),
            Node::Card { .. } => None,
        })
    }

    /// Markup for the children, in document order
    pub fn to_html(&self) -> String {
        self.children
            .iter()
            .map(|node| match node {
                Node::Card { card, hidden } => card.to_html(*hidden),
                Node::Placeholder { text } => format!(
                    r#"<div class="{}">{}</div>"#,
                    PLACEHOLDER_CLASS,
                    html_escape(text)
                ),
            })
            .collect()
    }

    fn card_node(&self, index: usize) -> Option<(&RenderedCard, bool)> {
        let position = *self.card_positions.get(index)?;
        match &self.children[position] {
            Node::Card { card, hidden } => Some((card, *hidden)),
            Node::Placeholder { .. } => None,
        }
    }

    fn card_node_mut(&mut self, index: usize) -> Option<&mut bool> {
        let position = *self.card_positions.get(index)?;
        match &mut self.children[position] {
            Node::Card { hidden, .. } => Some(hidden),
            Node::Placeholder { .. } => None,
        }
    }

    fn reindex_cards(&mut self) {
        self.card_positions = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Card { .. }))
            .map(|(position, _)| position)
            .collect();
    }
}

impl Container for MemoryContainer {
    fn append_card(&mut self, card: RenderedCard) {
        self.card_positions.push(self.children.len());
        self.children.push(Node::Card {
            card,
            hidden: false,
        });
    }

    fn card_count(&self) -> usize {
        self.card_positions.len()
    }

    fn card(&self, index: usize) -> Option<&RenderedCard> {
        self.card_node(index).map(|(card, _)| card)
    }

    fn set_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(flag) = self.card_node_mut(index) {
            *flag = hidden;
        }
    }

    fn is_hidden(&self, index: usize) -> bool {
        self.card_node(index)
            .map(|(_, hidden)| hidden)
            .unwrap_or(false)
    }

    fn remove_placeholder(&mut self) {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Placeholder { .. }));
        if self.children.len() != before {
            self.reindex_cards();
        }
    }

    fn append_placeholder(&mut self, text: &str) {
        self.children.push(Node::Placeholder {
            text: text.to_string(),
        });
    }

    fn placeholder_count(&self) -> usize {
        self.children
            .iter()
            .filter(|node| matches!(node, Node::Placeholder { .. }))
            .count()
    }
}
