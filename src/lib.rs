//! Sport recommendation scoring for athlete metric snapshots.
//!
//! The engine maps an athlete's physical indices onto a catalogue of sport
//! profiles using weighted min/optimal matching, ranks the results, and
//! explains them. It is a pure computation: callers gather the snapshot and
//! persist the results; the engine itself performs no I/O.

pub mod catalog;
pub mod insights;
pub mod metrics;
pub mod output;
pub mod scoring;
pub mod snapshot;
