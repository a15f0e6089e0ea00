//! Domain types shared by the squad builder store and API layers.

pub mod error;
pub mod position;
pub mod rating;
pub mod types;
