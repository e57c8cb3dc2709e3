//! suggest-service: HTTP relay that turns a short text snippet into
//! related search-query suggestions via an upstream completion API.
pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;
