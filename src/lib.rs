//! Shift registration engine for a single-location staff roster.
//!
//! This crate decides which work shifts and meal breaks are offerable to an
//! employee at a given moment, tracks capacity across shifts, meal slots, and
//! a fixed set of physical break rooms, and commits registrations through a
//! small two-state workflow. Meal-slot capacity is dynamically throttled to
//! keep every break room staffed.

#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
