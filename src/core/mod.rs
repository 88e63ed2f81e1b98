//! Launch building blocks: parameter collection and validation, driver
//! discovery, and the invocation builder. These are internal primitives
//! consumed by the high-level `api` module.
pub mod driver;
pub mod invocation;
pub mod params;
