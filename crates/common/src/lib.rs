//! Cross-cutting helpers shared by the service and server crates:
//! logging bootstrap, runtime environment checks and small wire types.

pub mod types;
pub mod utils;
pub mod env;
