//! Query construction for clinical-trial literature searches
//!
//! A search for one (substance, disease) pair restricts PubMed to English
//! records indexed with the substance, the MeSH disease heading, and one of
//! the clinical-trial publication types.

pub mod date;
pub mod filters;

pub use date::{DateRange, MonthDate};
pub use filters::TrialPublicationType;

/// Build the PubMed query for one substance/disease pair
///
/// Field values are inserted verbatim; callers supply well-formed names.
///
/// # Example
///
/// ```
/// use pubmed_trials::query::build_query;
///
/// let query = build_query("ibuprofen", "headache");
/// assert!(query.starts_with("ibuprofen[SUBS] AND headache[MESH] AND English[LANG]"));
/// assert!(query.contains("Clinical Trial, Phase IV[PTYP]"));
/// ```
pub fn build_query(substance: &str, disease: &str) -> String {
    let publication_types = TrialPublicationType::ALL
        .iter()
        .map(|ptype| ptype.to_query_string())
        .collect::<Vec<_>>()
        .join(" OR ");

    format!(
        "{substance}[SUBS] AND {disease}[MESH] AND {} AND ({publication_types})",
        filters::ENGLISH
    )
}
