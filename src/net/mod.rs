//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the single outbound HTTP call the page makes: relaying the
//! contact form to its form endpoint.

pub mod api;
