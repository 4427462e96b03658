//! PubMed client for searching records and extracting trial metadata
//!
//! This module talks to the NCBI E-utilities ESearch and EFetch endpoints and
//! reads the fixed-path fields of EFetch XML records.

pub mod client;
pub mod models;
pub mod parser;
pub mod responses;
pub mod xml;

// Re-export public types
pub use client::PubMedClient;
pub use models::RecordInfo;
pub use parser::PubMedXmlParser;
pub use xml::XmlNode;
