//! Concrete implementations of the core solver traits.

pub mod default;
