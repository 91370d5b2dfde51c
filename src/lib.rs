#![allow(clippy::doc_markdown)]

//! Client for the SMA Data Manager local REST API.
//!
//! The [`api::sma::Client`] keeps a single session with the appliance,
//! discovers the plant components, and fetches live measurements.
//! Operations on one client must be serialized by the caller: it takes `&mut self`
//! for everything that may touch the session.

pub mod api;
pub mod channels;
pub mod fqid;
pub mod poller;
pub mod prelude;
