//! Request plumbing shared by the provider adapters.
//!
//! Keep the public surface small: adapters live in [`crate::chat`] and
//! [`crate::embeddings`]; this module only issues and classifies requests.

mod execution;

pub(crate) use execution::{post_json, Endpoint};
