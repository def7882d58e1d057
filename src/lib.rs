//! Tiffin — meal-subscription pricing.
//!
//! Pure, stateless pricing for a tiffin delivery service: build a customer
//! plan from a request, layer add-ons onto it, combine plans into summary
//! statistics. The CLI wraps the same functions around a YAML roster file.

pub mod cli;
pub mod core;
