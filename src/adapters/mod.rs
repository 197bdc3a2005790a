// Adapters layer: concrete implementations for external systems (number library, Lambda proxy events, local http)

pub mod libphonenumber;
pub mod proxy;

#[cfg(feature = "cli")]
pub mod serve;
