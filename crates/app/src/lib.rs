//! Shared product domain and document storage modules.

pub mod context;
pub mod database;
pub mod products;

#[cfg(test)]
mod test;
