//! Publication-type and language tags used in trial searches

/// Publication types that mark a record as clinical-trial literature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPublicationType {
    ClinicalStudy,
    ClinicalTrial,
    RandomizedControlledTrial,
    ControlledClinicalTrial,
    ClinicalTrialPhaseI,
    ClinicalTrialPhaseII,
    ClinicalTrialPhaseIII,
    ClinicalTrialPhaseIV,
}

impl TrialPublicationType {
    /// Every trial publication type, in the order they appear in a query
    pub const ALL: [TrialPublicationType; 8] = [
        TrialPublicationType::ClinicalStudy,
        TrialPublicationType::ClinicalTrial,
        TrialPublicationType::RandomizedControlledTrial,
        TrialPublicationType::ControlledClinicalTrial,
        TrialPublicationType::ClinicalTrialPhaseI,
        TrialPublicationType::ClinicalTrialPhaseII,
        TrialPublicationType::ClinicalTrialPhaseIII,
        TrialPublicationType::ClinicalTrialPhaseIV,
    ];

    /// Label as it appears in PubMed records
    pub fn label(&self) -> &'static str {
        match self {
            TrialPublicationType::ClinicalStudy => "Clinical Study",
            TrialPublicationType::ClinicalTrial => "Clinical Trial",
            TrialPublicationType::RandomizedControlledTrial => "Randomized Controlled Trial",
            TrialPublicationType::ControlledClinicalTrial => "Controlled Clinical Trial",
            TrialPublicationType::ClinicalTrialPhaseI => "Clinical Trial, Phase I",
            TrialPublicationType::ClinicalTrialPhaseII => "Clinical Trial, Phase II",
            TrialPublicationType::ClinicalTrialPhaseIII => "Clinical Trial, Phase III",
            TrialPublicationType::ClinicalTrialPhaseIV => "Clinical Trial, Phase IV",
        }
    }

    pub(crate) fn to_query_string(self) -> String {
        format!("{}[PTYP]", self.label())
    }
}

/// Language restriction applied to every search
pub(crate) const ENGLISH: &str = "English[LANG]";
