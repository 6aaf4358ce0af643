//! SeaORM entities
//!
//! Table mappings for the PostgreSQL store. Domain types live in
//! `domain::entities`; adapters convert between the two.

pub mod favourites;
pub mod notes;
pub mod recipes;
pub mod users;
