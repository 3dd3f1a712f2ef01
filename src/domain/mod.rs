//! Доменная модель: карты, рука из пяти карт, колода.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::*;
pub use deck::*;
pub use hand::*;
