//! Sample games built on the engine

pub mod knight;

pub use knight::KnightDemo;
