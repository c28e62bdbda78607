//! # Coffee Cooling
//!
//! Newton's Law of Cooling for a hot beverage in a selection of containers.
//!
//! ## Crate layout
//!
//! - [`models`]: The cooling model, exposed as a [`twine_core::Model`].
//! - [`api`]: JSON request/response boundary for hosts such as a web handler.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use coffee_cooling::models::thermal::cooling::{CoolingModel, CoolingRequest};
//!
//! let model = CoolingModel::<51>::new();
//! let results = model
//!     .compute(&CoolingRequest::new(90.0, 20.0, 30.0, "ceramic"))
//!     .unwrap();
//!
//! assert_eq!(results.timeline[0].temperature, 90.0);
//! assert!(results.final_temp < 90.0);
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod api;
pub mod models;
pub mod support;
