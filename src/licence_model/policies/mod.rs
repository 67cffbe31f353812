pub mod licence_reference;

pub use licence_reference::is_licence_ref;
