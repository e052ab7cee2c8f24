//! AI proxy service.
//!
//! A thin HTTP layer that validates typed product-description requests,
//! forwards them to an external generation provider, and reshapes the
//! provider's output (or its failure) into the response envelopes the
//! storefront expects. Provider access goes through the
//! [`GenerationProvider`](provider::GenerationProvider) trait so the
//! endpoints can be exercised against a scripted mock.
pub mod config;
pub mod models;
pub mod provider;
pub mod server;

mod mock;

pub use mock::MockGenerationProvider;
