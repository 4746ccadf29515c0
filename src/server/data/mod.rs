//! Database repository layer and static template storage.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. The template store reads the command
//! templates file; it is not backed by the database.

pub mod credential;
pub mod template;
pub mod usage;

#[cfg(test)]
mod test;
