//! Products

mod codec;
mod errors;
mod handlers;

pub(crate) use handlers::*;
