//! Stylist Intake - Guided Shopping Profile Collection
//!
//! This crate implements a finite-state dialogue engine that elicits a
//! structured shopping profile (mode, style, items, occasion, descriptions,
//! body measurements) one validated answer at a time.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
