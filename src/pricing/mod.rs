// src/pricing/mod.rs
pub mod real;
pub mod generic;

pub use generic::{bs_price_call_generic, PriceScalar};
pub use real::bs_price_call;
