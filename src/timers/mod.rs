//! Wall clock timers for reporting solve times.

mod timers;
pub use timers::*;
pub(crate) use timers::{notimeit, timeit};
