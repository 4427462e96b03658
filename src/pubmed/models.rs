use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Trial-related metadata extracted from one PubMed record
///
/// Every field is independently absent when the record lacks the element it
/// comes from. For the two sets, `Some(empty)` means the containing list was
/// present but yielded nothing, which is different from `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInfo {
    /// Journal issue publication year
    pub pub_year: Option<String>,
    /// ClinicalTrials.gov accession numbers (NCT identifiers)
    pub ncts: Option<BTreeSet<String>>,
    /// Publication type labels (e.g., "Clinical Trial", "Journal Article")
    pub pub_types: Option<BTreeSet<String>>,
}

impl RecordInfo {
    /// Record info with every field absent
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn is_absent(&self) -> bool {
        self.pub_year.is_none() && self.ncts.is_none() && self.pub_types.is_none()
    }
}
