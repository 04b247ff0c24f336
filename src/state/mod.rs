//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `selection`, `form`) so individual
//! components can depend on small focused models. Each domain pairs a plain
//! value type carrying the actual logic with a thin store handle that wraps
//! it in an `RwSignal` — the signal is private to the handle, so mutation
//! only happens through the operations the handle exposes, and every reader
//! subscribes through the reactive graph.

pub mod form;
pub mod selection;
pub mod session;
