//! Response-handling layer for the Dropbox REST API.
//!
//! Requests go out through a per-endpoint [`Token`], and every response is
//! classified by status code into a typed [`Error`] or returned as a
//! JSON-decoded or raw body.

pub mod client;
pub mod config;

pub use client::{
    BoxError, Connection, Error, Payload, ReqwestToken, RequestOptions, Response, ResponseBody,
    Token, handle_response, query, request, request_url,
};
pub use config::{Config, Endpoint};
