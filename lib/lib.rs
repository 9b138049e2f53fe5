//! `info-server` library.

pub mod commands;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod server;
pub mod styles;
pub mod time;
pub mod validate;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use handlers::*;
pub use query::*;
pub use response::*;
pub use server::*;
pub use time::*;
pub use validate::*;
