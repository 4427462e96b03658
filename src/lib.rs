//! # PubMed Trials
//!
//! Finds PubMed publications that link a substance and a disease to
//! clinical trials, and extracts trial metadata from each matched record.
//!
//! ## Features
//!
//! - **Trial-focused queries**: substance, MeSH disease, English language and
//!   the clinical-trial publication types in one query string
//! - **E-utilities client**: ESearch for identifiers, EFetch for records
//! - **Record metadata**: publication year, ClinicalTrials.gov identifiers and
//!   publication types, each reported as absent when the record lacks it
//! - **Batch pipeline**: one output row per matched publication, in discovery order
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_trials::{ClientConfig, InputPair, Pipeline, PipelineConfig, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::with_config(
//!         ClientConfig::new().with_email("researcher@university.edu"),
//!     );
//!     let pipeline = Pipeline::from_client(client, PipelineConfig::default());
//!
//!     let pairs = vec![InputPair::new("ibuprofen", "headache")];
//!     for row in pipeline.run(&pairs).await? {
//!         println!("pair {} -> PMID {} ({:?})", row.index, row.pmid, row.info.pub_year);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod pubmed;
pub mod query;
pub mod table;

// Re-export main types for convenience
pub use config::{ClientConfig, PipelineConfig};
pub use error::{PubMedError, Result};
pub use pipeline::{InputPair, Pipeline, RecordFetch, RecordSearch, ResultRow};
pub use pubmed::{PubMedClient, PubMedXmlParser, RecordInfo};
pub use query::{DateRange, MonthDate, build_query};
pub use table::OutputFormat;
