//! gc: GharConnect catalog search
//!
//! A command-line search over a housing society's service catalog: home
//! service vendors, doctors, daily-needs delivery, and apartment rentals.
//! The catalog is aggregated into a flat candidate pool and queries are
//! answered with an additive relevance heuristic, with well-known intents
//! short-circuited into direct category redirects.

#![warn(missing_docs)]

pub mod cli;
