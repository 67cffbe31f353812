/// Licence model - the SPDX licence value types and classification rules
///
/// Pure data and functions; no I/O happens in this layer.
pub mod domain;
pub mod policies;
