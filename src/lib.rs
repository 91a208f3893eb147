//! Leave Calculation Engine for Jordanian labor law
//!
//! This crate provides functionality for computing leave balances, working-day
//! counts, and public-holiday lookups for HR systems operating under the
//! Jordanian Labor Law (Friday/Saturday weekend, tenure-tiered vacation
//! entitlements, per-year Islamic and Christian holiday tables).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
