//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric invariants checked at construction.

pub mod constraint;
