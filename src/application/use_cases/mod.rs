/// Use cases module containing application business logic orchestration
mod classify_licences;
mod load_expressions;
mod load_licence_list;

pub use classify_licences::ClassifyLicencesUseCase;
pub use load_expressions::LoadExpressionsUseCase;
pub use load_licence_list::LoadLicenceListUseCase;
