/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (licence list, file system, console).
pub mod licence_list;
pub mod licence_source_reader;
pub mod output_presenter;
pub mod report_formatter;

pub use licence_list::{LicenceList, LicenceListRelease, LicenceListStore};
pub use licence_source_reader::LicenceSourceReader;
pub use output_presenter::OutputPresenter;
pub use report_formatter::ReportFormatter;
