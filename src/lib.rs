//! Backstep: step-tracing backtracking engines.
//!
//! Two independent, structurally identical search engines record every state
//! transition of a naive backtracking search as an ordered, immutable step
//! trace, meant to be replayed by an external visualizer:
//!
//! - [`queens`]: one-queen-per-row placement under the non-attack constraint,
//!   plus a silent all-solutions counter.
//! - [`coloring`]: per-node color assignment under the adjacent-distinct
//!   constraint, over graphs from [`graph`] or built by the caller.
//!
//! Both engines are pure synchronous functions: no I/O, no shared state, no
//! cancellation. The trace grows exponentially with input size, so callers
//! bound their inputs. [`export`] writes a finished trace to disk for a
//! replaying UI.

pub mod coloring;
pub mod export;
pub mod graph;
pub mod queens;
pub mod trace;

pub use graph::{Edge, Graph, Node, Topology};
pub use trace::{Step, StepAction};
