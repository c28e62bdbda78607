//! Thermal systems models.
//!
//! This module contains models for transient heat loss from a beverage to its
//! surroundings.

pub mod cooling;
