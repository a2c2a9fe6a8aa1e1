//! Integration test support backed by a shared `MongoDB` container.

mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::*;
