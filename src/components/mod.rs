//! UI components for the portfolio.

pub mod cards;
pub mod gallery;
pub mod images;
mod nav_header;
pub mod profile;
mod showcase;

pub use nav_header::{NavHeader, NavLocation};
pub use showcase::Showcase;
