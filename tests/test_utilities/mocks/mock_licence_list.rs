use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use spdx_licences::prelude::*;

/// Mock LicenceList for testing
///
/// Answers from a fixed set of identifiers, or from a queue of scripted
/// answers when one is given. Counts every lookup.
pub struct MockLicenceList {
    pub known: Vec<String>,
    scripted: Mutex<VecDeque<bool>>,
    lookups: AtomicUsize,
}

impl MockLicenceList {
    pub fn new() -> Self {
        Self {
            known: Vec::new(),
            scripted: Mutex::new(VecDeque::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_licence(mut self, id: &str) -> Self {
        self.known.push(id.to_string());
        self
    }

    /// Answers the next lookups with `answers`, in order, regardless of identifier
    pub fn with_answers(self, answers: &[bool]) -> Self {
        self.scripted.lock().unwrap().extend(answers.iter().copied());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for MockLicenceList {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenceList for MockLicenceList {
    fn is_known(&self, id: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(answer) = self.scripted.lock().unwrap().pop_front() {
            return answer;
        }
        self.known.iter().any(|k| k == id)
    }
}
