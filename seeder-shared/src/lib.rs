//! # Seeder Shared
//! This crate defines shared data structures and types used across the seeding
//! toolkit. It includes the entity-kind taxonomy, the CSV row records for every
//! entity kind, and the per-step reporting types.
pub mod types;
