//! Client-side core for Money Map.
//!
//! The crate is split along the same seams as the application itself:
//!
//! - [`api`]: thin HTTP clients for the Money Map backend;
//! - [`store`]: the event/reducer state container and its slices;
//! - [`actions`]: async action creators driving the request lifecycle;
//! - [`auth`]: the route guard for protected views;
//! - [`token_store`]: durable persistence for the session bearer token.
//!
//! A front end owns one [`store::Store`], one [`api::ApiClient`] and one
//! [`token_store::TokenStore`] implementation, and funnels every state
//! change through the action creators.

pub mod actions;
pub mod api;
pub mod auth;
pub mod error;
pub mod store;
pub mod token_store;
