//! Mock connectors for external evidence sources.
//!
//! Each connector synthesizes the text payload a real integration would
//! fetch — a Confluence page body, Jira epic summaries, an AWS inventory
//! digest. Real document parsing and API transport are out of scope; the
//! payloads are fixed.

use std::str::FromStr;

use crate::error::IngestError;

use super::Artifact;

const CONFLUENCE_PAGE_BODY: &str = "The core of Project Phoenix is SAP S/4HANA, \
hosted on AWS EC2 instances in eu-west-1. Customer data is managed via \
Salesforce. We use a Kafka event mesh for integration between SAP and \
Salesforce.";

const JIRA_EPIC_SUMMARIES: &[&str] = &[
    "Deploy SAP S/4HANA Infrastructure",
    "Integrate Salesforce with ERP",
];

/// Mock AWS inventory counts surfaced in the synthesized digest.
const AWS_EC2_INSTANCES: usize = 2;
const AWS_S3_BUCKETS: usize = 2;

/// An external evidence source with a canned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Architecture overview page from the team wiki.
    Confluence,
    /// Epic summaries from the migration project.
    Jira,
    /// Resource inventory digest from the cloud account.
    Aws,
}

impl Connector {
    /// All connectors, in presentation order.
    pub fn all() -> [Connector; 3] {
        [Connector::Confluence, Connector::Jira, Connector::Aws]
    }

    /// The provenance label attached to artifacts from this connector.
    pub fn label(&self) -> &'static str {
        match self {
            Connector::Confluence => "Confluence",
            Connector::Jira => "Jira",
            Connector::Aws => "AWS API",
        }
    }

    /// Fetch the connector's payload. Total — the mocks cannot fail.
    pub fn fetch(&self) -> Artifact {
        tracing::info!(connector = self.label(), "fetching connector payload");
        match self {
            Connector::Confluence => Artifact::new(CONFLUENCE_PAGE_BODY, self.label()),
            Connector::Jira => Artifact::new(JIRA_EPIC_SUMMARIES.join("\n"), self.label()),
            Connector::Aws => Artifact::new(
                format!(
                    "AWS resources found: {AWS_EC2_INSTANCES} EC2 instances and \
                     {AWS_S3_BUCKETS} S3 buckets."
                ),
                self.label(),
            ),
        }
    }
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Connector {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confluence" => Ok(Connector::Confluence),
            "jira" => Ok(Connector::Jira),
            "aws" => Ok(Connector::Aws),
            _ => Err(IngestError::UnknownConnector {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confluence_payload_mentions_the_full_stack() {
        let artifact = Connector::Confluence.fetch();
        assert_eq!(artifact.source, "Confluence");
        for keyword in ["SAP", "AWS", "Salesforce", "Kafka"] {
            assert!(artifact.text.contains(keyword), "missing {keyword}");
        }
    }

    #[test]
    fn jira_payload_joins_epic_summaries() {
        let artifact = Connector::Jira.fetch();
        assert_eq!(artifact.source, "Jira");
        assert_eq!(artifact.text.lines().count(), 2);
    }

    #[test]
    fn aws_payload_summarizes_inventory() {
        let artifact = Connector::Aws.fetch();
        assert_eq!(artifact.source, "AWS API");
        assert!(artifact.text.contains("2 EC2 instances"));
    }

    #[test]
    fn parse_connector_names() {
        assert_eq!("confluence".parse::<Connector>().unwrap(), Connector::Confluence);
        assert_eq!("JIRA".parse::<Connector>().unwrap(), Connector::Jira);
        assert_eq!("aws".parse::<Connector>().unwrap(), Connector::Aws);
        assert!("sharepoint".parse::<Connector>().is_err());
    }
}
