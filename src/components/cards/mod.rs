//! Entity cards and the expandable card grid.

mod card_grid;
mod entity_card;

pub use card_grid::CardGridView;
pub use entity_card::EntityCard;
