//! Microhttp - Minimal HTTP/1.1 server over raw TCP
//!
//! Core library for request framing, routing, and response framing.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
