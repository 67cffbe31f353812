/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the seams between the licence model and the systems
/// around it: the SPDX Licence List, file access, and report output.
pub mod outbound;
