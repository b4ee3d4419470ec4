//! HTTP client for the guide's remote data store.
//!
//! The store is a Supabase project consumed through its PostgREST
//! endpoint: plain GETs with `apikey`/`Authorization` headers, filters
//! and ordering expressed as query parameters, rows returned as JSON
//! arrays. This crate exposes the two operations the screens need:
//! fetch one row by id, and fetch a whole ordered table.

mod client;
mod error;

pub use client::StoreClient;
pub use error::StoreError;
