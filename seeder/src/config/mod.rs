//! Configuration module for the seeder binary.
//! Wires CLI arguments into the components of a seeding run.
mod dependencies;

pub use dependencies::Dependencies;
