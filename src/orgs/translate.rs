//! Translation of an organisation into Cypher write operations.

use serde_json::{Map, Value};

use crate::error_handling::TranslateError;
use crate::storage::CypherQuery;

use super::model::Organisation;

pub const FACTSET_AUTHORITY: &str = "http://api.ft.com/system/FACTSET-EDM";
pub const LEI_AUTHORITY: &str = "http://api.ft.com/system/LEI";

/// Indexes the organisation writes rely on, as `(label, property)`.
pub const SUGGESTED_INDEXES: &[(&str, &str)] = &[
    ("Organisation", "uuid"),
    ("Concept", "uuid"),
    ("Industry", "uuid"),
];

/// Builds the write operations for one organisation.
///
/// The node is merged on `uuid` and its properties replaced wholesale, then
/// the optional parent and industry relationships are merged.
pub fn to_queries(org: &Organisation) -> Result<Vec<CypherQuery>, TranslateError> {
    let mut statement = String::from(
        "MERGE (n:Concept {uuid: $uuid})\n\
         SET n = $allProps\n\
         SET n :Organisation\n",
    );

    if !org.org_type.is_empty() && org.org_type != "Organisation" {
        if !is_valid_label(&org.org_type) {
            return Err(TranslateError::InvalidLabel(org.org_type.clone()));
        }
        statement.push_str(&format!("SET n :{}\n", org.org_type));
    }

    if !org.parent_organisation.is_empty() {
        statement.push_str(
            "MERGE (p:Concept {uuid: $puuid})\n\
             MERGE (n)-[:SUB_ORG_OF]->(p)\n\
             SET p :Organisation\n",
        );
    }

    if !org.industry_classification.is_empty() {
        statement.push_str(
            "MERGE (ic:Concept {uuid: $icuuid})\n\
             MERGE (n)-[:IN_INDUSTRY]->(ic)\n\
             SET ic :Industry\n",
        );
    }

    let query = CypherQuery::new(statement)
        .param("uuid", org.uuid.clone())
        .param("allProps", Value::Object(properties(org)))
        .param("puuid", org.parent_organisation.clone())
        .param("icuuid", org.industry_classification.clone());

    Ok(vec![query])
}

/// Node properties: `uuid` plus every field that carries a value.
fn properties(org: &Organisation) -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("uuid".into(), org.uuid.clone().into());

    if org.extinct {
        props.insert("extinct".into(), true.into());
    }
    insert_list(&mut props, "formerNames", &org.former_names);
    insert_text(&mut props, "hiddenLabel", &org.hidden_label);
    insert_text(&mut props, "legalName", &org.legal_name);
    insert_list(&mut props, "localNames", &org.local_names);
    if !org.proper_name.is_empty() {
        props.insert("properName".into(), org.proper_name.clone().into());
        props.insert("prefLabel".into(), org.proper_name.clone().into());
    }
    insert_text(&mut props, "shortName", &org.short_name);
    insert_list(&mut props, "tradeNames", &org.trade_names);

    for identifier in &org.identifiers {
        match identifier.authority.as_str() {
            FACTSET_AUTHORITY => {
                props.insert(
                    "factsetIdentifier".into(),
                    identifier.identifier_value.clone().into(),
                );
            }
            LEI_AUTHORITY => {
                props.insert(
                    "leiIdentifier".into(),
                    identifier.identifier_value.clone().into(),
                );
            }
            _ => {}
        }
    }

    props
}

fn insert_text(props: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        props.insert(key.into(), value.into());
    }
}

fn insert_list(props: &mut Map<String, Value>, key: &str, values: &[String]) {
    if !values.is_empty() {
        props.insert(key.into(), values.to_vec().into());
    }
}

/// Labels are spliced into the statement, so only plain identifiers are allowed.
fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orgs::model::Identifier;
    use serde_json::json;

    fn org(uuid: &str) -> Organisation {
        Organisation {
            uuid: uuid.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_organisation() {
        let queries = to_queries(&org("u-1")).unwrap();
        assert_eq!(queries.len(), 1);
        let q = &queries[0];
        assert!(q.statement.contains("MERGE (n:Concept {uuid: $uuid})"));
        assert!(q.statement.contains("SET n :Organisation"));
        assert!(!q.statement.contains("SUB_ORG_OF"));
        assert!(!q.statement.contains("IN_INDUSTRY"));
        assert_eq!(q.parameters["uuid"], json!("u-1"));
        assert_eq!(q.parameters["allProps"], json!({"uuid": "u-1"}));
    }

    #[test]
    fn test_properties_include_only_populated_fields() {
        let mut o = org("u-2");
        o.proper_name = "Acme Corp".to_string();
        o.legal_name = "Acme Corporation Ltd".to_string();
        o.trade_names = vec!["Acme".to_string()];
        o.extinct = true;
        o.identifiers = vec![
            Identifier {
                authority: FACTSET_AUTHORITY.to_string(),
                identifier_value: "000C7F-E".to_string(),
            },
            Identifier {
                authority: LEI_AUTHORITY.to_string(),
                identifier_value: "LEI123".to_string(),
            },
            Identifier {
                authority: "http://api.ft.com/system/OTHER".to_string(),
                identifier_value: "ignored".to_string(),
            },
        ];

        let queries = to_queries(&o).unwrap();
        assert_eq!(
            queries[0].parameters["allProps"],
            json!({
                "uuid": "u-2",
                "extinct": true,
                "properName": "Acme Corp",
                "prefLabel": "Acme Corp",
                "legalName": "Acme Corporation Ltd",
                "tradeNames": ["Acme"],
                "factsetIdentifier": "000C7F-E",
                "leiIdentifier": "LEI123"
            })
        );
    }

    #[test]
    fn test_relationships_and_type_label() {
        let mut o = org("u-3");
        o.org_type = "PublicCompany".to_string();
        o.parent_organisation = "parent-1".to_string();
        o.industry_classification = "ic-1".to_string();

        let q = &to_queries(&o).unwrap()[0];
        assert!(q.statement.contains("SET n :PublicCompany"));
        assert!(q.statement.contains("MERGE (n)-[:SUB_ORG_OF]->(p)"));
        assert!(q.statement.contains("MERGE (n)-[:IN_INDUSTRY]->(ic)"));
        assert!(q.statement.contains("SET ic :Industry"));
        assert_eq!(q.parameters["puuid"], json!("parent-1"));
        assert_eq!(q.parameters["icuuid"], json!("ic-1"));
    }

    #[test]
    fn test_organisation_type_adds_no_extra_label() {
        let mut o = org("u-4");
        o.org_type = "Organisation".to_string();
        let q = &to_queries(&o).unwrap()[0];
        assert_eq!(q.statement.matches("SET n :").count(), 1);
    }

    #[test]
    fn test_invalid_type_label_rejected() {
        let mut o = org("u-5");
        o.org_type = "Company) DETACH DELETE (n".to_string();
        assert_eq!(
            to_queries(&o),
            Err(TranslateError::InvalidLabel(
                "Company) DETACH DELETE (n".to_string()
            ))
        );
    }

    #[test]
    fn test_is_valid_label() {
        assert!(is_valid_label("Company"));
        assert!(is_valid_label("Public_Company2"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_label("2Company"));
        assert!(!is_valid_label("Public Company"));
    }
}
