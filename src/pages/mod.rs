//! Page components for the portfolio.

mod about;
mod games;
mod projects;
mod store;

pub use about::About;
pub use games::Games;
pub use projects::Projects;
pub use store::Store;
