/// SPDX Licence List adapters
mod in_memory_licence_list;
mod spdx_licence_list;

pub use in_memory_licence_list::InMemoryLicenceList;
pub use spdx_licence_list::parse_spdx_licence_list;
