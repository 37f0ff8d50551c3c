//! Yelp Fusion integration
//!
//! Searches the Yelp Fusion business search API
//! (<https://docs.developer.yelp.com/reference/v3_business_search>) for
//! businesses of one category around a coordinate pair.
//!
//! Requests authenticate with a bearer token; the API key is never part of
//! the URL.

mod client;
mod config;
mod error;
mod models;

pub use client::{BusinessSearch, YelpFusionClient};
pub use config::YelpConfig;
pub use error::YelpError;
pub use models::Business;
