//! Domain core for a fireworks ("crackers") retail storefront.
//!
//! There is no HTTP surface and no database here: the public API is the
//! in-process command set consumed by a UI layer, and durable state lives in
//! a key -> JSON-text snapshot store modeled on browser local storage.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod language;
pub mod models;
pub mod state;
pub mod storage;
