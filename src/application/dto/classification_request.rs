use crate::licence_model::domain::{AnyLicence, Licence};

/// ClassificationRequest - licence trees to classify
#[derive(Debug, Clone, Default)]
pub struct ClassificationRequest {
    /// Licence expression trees, classified in order
    pub expressions: Vec<AnyLicence>,
}

impl ClassificationRequest {
    pub fn new(expressions: Vec<AnyLicence>) -> Self {
        Self { expressions }
    }

    /// Builds a request with one simple licence per identifier
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ids.into_iter()
                .map(|id| Licence::new(id, None).into())
                .collect(),
        )
    }
}
