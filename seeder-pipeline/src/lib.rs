//! # Seeder Pipeline
//! This crate defines the core modules for replaying entity data against the
//! e-commerce backend.
//! It includes modules for loading CSV sources, generating synthetic data,
//! hydrating the registry from existing remote entities, the per-entity
//! seeders, the resumable run ledger, and the orchestrator that drives the
//! steps in dependency order, along with error handling.
pub mod errors;
pub mod generator;
pub mod hydrator;
pub mod ledger;
pub mod orchestrator;
pub mod seeders;
pub mod source;
