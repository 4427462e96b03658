//! Shared helpers for integration tests: mock E-utilities responses and clients

#![allow(dead_code)]

use pubmed_trials::{ClientConfig, PubMedClient};
use wiremock::MockServer;

/// ESearch JSON body with the given PMIDs
pub fn esearch_json_response(pmids: &[&str]) -> String {
    let id_list: Vec<String> = pmids.iter().map(|id| format!("\"{}\"", id)).collect();
    format!(
        r#"{{
            "header": {{"type": "esearch", "version": "0.3"}},
            "esearchresult": {{
                "count": "{}",
                "retmax": "{}",
                "retstart": "0",
                "idlist": [{}],
                "translationset": [],
                "querytranslation": ""
            }}
        }}"#,
        pmids.len(),
        pmids.len(),
        id_list.join(",")
    )
}

/// EFetch XML body for one article with the given inner `<Article>` content
pub fn efetch_xml_response(pmid: &str, article_body: &str) -> String {
    format!(
        r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2019//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_190101.dtd">
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">{pmid}</PMID>
            <Article PubModel="Print">
                {article_body}
            </Article>
        </MedlineCitation>
        <PubmedData>
            <ArticleIdList>
                <ArticleId IdType="pubmed">{pmid}</ArticleId>
            </ArticleIdList>
        </PubmedData>
    </PubmedArticle>
</PubmedArticleSet>"#
    )
}

/// A complete trial record: year, one NCT identifier, one publication type
pub fn trial_article_body(year: &str, nct: &str, pub_type: &str) -> String {
    format!(
        r#"<Journal>
                    <JournalIssue CitedMedium="Internet">
                        <PubDate><Year>{year}</Year></PubDate>
                    </JournalIssue>
                    <Title>Test Journal</Title>
                </Journal>
                <ArticleTitle>Test trial</ArticleTitle>
                <DataBankList CompleteYN="Y">
                    <DataBank>
                        <DataBankName>ClinicalTrials.gov</DataBankName>
                        <AccessionNumberList>
                            <AccessionNumber>{nct}</AccessionNumber>
                        </AccessionNumberList>
                    </DataBank>
                </DataBankList>
                <PublicationTypeList>
                    <PublicationType>{pub_type}</PublicationType>
                </PublicationTypeList>"#
    )
}

/// Create a PubMedClient pointing at a mock server
pub fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_email("test@example.com")
        .with_tool("pubmed-trials-tests");

    PubMedClient::with_config(config)
}

/// Helper function to check if real API tests should be run
/// Requires both the integration-tests feature and the PUBMED_REAL_API_TESTS env var
pub fn should_run_real_api_tests() -> bool {
    #[cfg(not(feature = "integration-tests"))]
    {
        false
    }

    #[cfg(feature = "integration-tests")]
    {
        std::env::var("PUBMED_REAL_API_TESTS").is_ok()
    }
}

/// Client for the real NCBI API, identified with NCBI_EMAIL when set
pub fn create_real_api_client() -> PubMedClient {
    let email = std::env::var("NCBI_EMAIL").unwrap_or_else(|_| "test@example.com".to_string());
    PubMedClient::with_config(
        ClientConfig::new()
            .with_email(email)
            .with_tool("pubmed-trials-integration-tests"),
    )
}
