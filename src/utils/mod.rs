//! Common utilities shared by the attribute store and the serializer.

mod dot;

pub use dot::{escape_dot, quote_id};
