//! Built-in extraction rules for common enterprise landscape evidence.
//!
//! The rules are declared in a fixed order and evaluation preserves it:
//! the integration rule at the end only connects application nodes that the
//! earlier rules created. Extend the set with [`Extractor::push_rule`]
//! rather than editing actions in place.
//!
//! [`Extractor::push_rule`]: super::Extractor::push_rule

use crate::graph::{Edge, NodeKind};

use super::{GraphDraft, Rule};

/// Well-known node ids produced by the built-in rules.
pub const CAP_ERP: &str = "cap_erp";
pub const APP_SAP: &str = "app_sap";
pub const APP_GENERIC: &str = "app_generic";
pub const INFRA_AWS: &str = "infra_aws";
pub const CAP_CRM: &str = "cap_crm";
pub const APP_SFDC: &str = "app_sfdc";

/// The built-in rule set, in evaluation order.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new("sap-erp", &["sap"], sap_rule),
        Rule::new("aws-infra", &["aws", "ec2"], aws_rule),
        Rule::new("salesforce-crm", &["salesforce"], salesforce_rule),
        Rule::new("kafka-integration", &["kafka", "event mesh"], kafka_rule),
    ]
}

/// SAP evidence: an ERP capability realized by SAP S/4HANA.
fn sap_rule(draft: &mut GraphDraft) {
    let cap = draft.ensure_node(CAP_ERP, NodeKind::Capability, "ERP Management");
    let app = draft.ensure_node(APP_SAP, NodeKind::App, "SAP S/4HANA");
    draft.push_edge(Edge::between(cap, app).animated());
}

/// AWS evidence: an EC2 infra node hosting whatever app is in scope.
///
/// Falls back to a generic workload node when no SAP app exists yet, so the
/// infra node never ends up edge-less.
fn aws_rule(draft: &mut GraphDraft) {
    let app = if draft.contains(APP_SAP) {
        APP_SAP.to_string()
    } else {
        draft.ensure_node(APP_GENERIC, NodeKind::App, "Cloud Workload")
    };
    let infra = draft.ensure_node(INFRA_AWS, NodeKind::Infra, "AWS EC2");
    draft.push_edge(Edge::between(app, infra));
}

/// Salesforce evidence: a CRM capability realized by Salesforce.
fn salesforce_rule(draft: &mut GraphDraft) {
    let cap = draft.ensure_node(CAP_CRM, NodeKind::Capability, "CRM");
    let app = draft.ensure_node(APP_SFDC, NodeKind::App, "Salesforce");
    draft.push_edge(Edge::between(cap, app).animated());
}

/// Kafka / event mesh evidence: an integration edge between SAP and
/// Salesforce. Only fires when both endpoints were produced by earlier rules.
fn kafka_rule(draft: &mut GraphDraft) {
    if draft.contains(APP_SAP) && draft.contains(APP_SFDC) {
        draft.push_edge(Edge::between(APP_SAP, APP_SFDC).with_label("Kafka Events"));
    }
}
