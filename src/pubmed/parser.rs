use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::RecordInfo;
use crate::pubmed::xml::XmlNode;

const DATA_BANK_LIST: &str = "PubmedArticle/MedlineCitation/Article/DataBankList";
const PUB_YEAR: &str = "PubmedArticle/MedlineCitation/Article/Journal/JournalIssue/PubDate/Year";
const PUBLICATION_TYPE_LIST: &str = "PubmedArticle/MedlineCitation/Article/PublicationTypeList";

const CLINICAL_TRIALS_GOV: &str = "ClinicalTrials.gov";

pub struct PubMedXmlParser;

impl PubMedXmlParser {
    /// Extract trial metadata from an EFetch XML document
    ///
    /// Missing elements produce absent fields; only a document that cannot be
    /// parsed at all is an error.
    #[instrument(skip(xml), fields(xml_size = xml.len()))]
    pub fn parse_record_info(xml: &str) -> Result<RecordInfo> {
        let root = XmlNode::parse(xml)?;

        let info = RecordInfo {
            pub_year: extract_pub_year(&root),
            ncts: extract_nct_ids(&root),
            pub_types: extract_publication_types(&root),
        };

        debug!(
            has_pub_year = info.pub_year.is_some(),
            nct_count = info.ncts.as_ref().map(|s| s.len()),
            pub_type_count = info.pub_types.as_ref().map(|s| s.len()),
            "Completed record parsing"
        );

        Ok(info)
    }
}

/// NCT identifiers from the ClinicalTrials.gov data bank entries
fn extract_nct_ids(root: &XmlNode) -> Option<BTreeSet<String>> {
    let databank_list = root.find(DATA_BANK_LIST)?;

    let ncts = databank_list
        .children()
        .iter()
        .filter(|bank| {
            bank.find("DataBankName").and_then(XmlNode::text) == Some(CLINICAL_TRIALS_GOV)
        })
        .filter_map(|bank| bank.find("AccessionNumberList"))
        .flat_map(|list| list.children().iter().filter_map(XmlNode::text))
        .map(str::to_string)
        .collect();

    Some(ncts)
}

fn extract_pub_year(root: &XmlNode) -> Option<String> {
    root.find(PUB_YEAR)?.text().map(str::to_string)
}

fn extract_publication_types(root: &XmlNode) -> Option<BTreeSet<String>> {
    let list = root.find(PUBLICATION_TYPE_LIST)?;

    Some(
        list.children()
            .iter()
            .filter_map(XmlNode::text)
            .map(str::to_string)
            .collect(),
    )
}
