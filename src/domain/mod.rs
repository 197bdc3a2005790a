// Domain layer: request/response shapes and the formatter port. No framework dependencies beyond serde.

pub mod model;
pub mod ports;
