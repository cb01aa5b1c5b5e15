//! CPU scheduling discipline simulator.
//!
//! Generates a synthetic workload and dispatches it under one of three
//! classic disciplines, producing a trace of service events. The point is
//! to show how the ordering policy changes who runs when, and how
//! Round-Robin requeues a task until its burst is used up.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `DispatchTrace`, `DispatchEntry`,
//!   `PolicyKind`, `Outcome`
//! - **`generator`**: Seedable workload generator with a logical clock
//! - **`policies`**: `Fcfs`, `Sjf`, `RoundRobin` behind the
//!   `SchedulingPolicy` trait
//! - **`validation`**: Menu/quantum parsing and workload integrity checks
//! - **`config`**: Run settings, loadable from JSON
//! - **`simulation`**: Driver tying generation and dispatch together
//!
//! # Determinism
//!
//! The core never reads the wall clock. Creation times come from a logical
//! counter and randomness from an injected RNG, so a fixed seed always
//! yields the same trace.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod generator;
pub mod models;
pub mod policies;
pub mod simulation;
pub mod validation;
