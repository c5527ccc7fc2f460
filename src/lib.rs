//! Typed data-binding layer for the [Telegram bot API][1].
//!
//! The crate is organized in two directions around the wire format:
//!
//! - incoming payloads are decoded from a generic JSON mapping through the
//!   [`wire::FromWire`] contract, which tolerates unknown keys and resolves
//!   polymorphic families ([`inline::result::InlineQueryResult`],
//!   [`inline::content::InputMessageContent`], [`markup::ReplyMarkup`]) to
//!   their concrete kind;
//! - outgoing entities serialize with `serde`, omitting every unset optional
//!   field and always emitting the family discriminant.
//!
//! [`bot::Bot`] is the thin facade on top: it issues the HTTP calls and routes
//! the `result` payload of the API envelope back through the decoder.
//!
//! [1]: https://core.telegram.org/bots/api

pub mod bot;
pub mod client;
pub mod error;
pub mod inline;
pub mod markup;
pub mod media;
pub mod methods;
pub mod objects;
pub mod prelude;
pub mod response;
pub mod wire;

pub use crate::{
    bot::Bot,
    error::{TelegramError, WireError},
    wire::FromWire,
};
