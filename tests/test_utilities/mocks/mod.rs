/// Mock implementations for testing
mod mock_licence_list;
mod mock_licence_source_reader;

pub use mock_licence_list::MockLicenceList;
pub use mock_licence_source_reader::MockLicenceSourceReader;
