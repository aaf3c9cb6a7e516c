//! Request gates applied before route handlers.
//!
//! `authenticate` resolves a bearer token into a request identity;
//! `restrict` rejects identities whose role is outside a per-route
//! allow-list. Every protected route runs `authenticate` first.

pub mod authenticate;
pub mod restrict;

pub use authenticate::authenticate;
pub use restrict::restrict;
