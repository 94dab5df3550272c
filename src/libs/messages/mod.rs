//! User-facing message catalogue and output macros.
//!
//! Every line the CLI prints goes through a [`Message`] variant, so wording
//! lives in one place ([`display`]) and the output routing lives in another
//! ([`macros`]).

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

