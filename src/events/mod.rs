//! Event types and messages used by the interaction core.
//!
//! This module groups the domain events exchanged across systems. Observer
//! events announce grab state transitions to any number of listeners;
//! buffered messages carry the proximity signal injected by the host
//! engine's collision layer.
//!
//! Submodules:
//! - [`grab`] – grab/release notifications fired by the canonical protocol
//! - [`contact`] – enter/exit contact messages feeding proximity tracking
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod contact;
pub mod grab;
