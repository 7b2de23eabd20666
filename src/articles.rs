use serde_json::{Map, Value};

/// GDPR Articles 15-20, the only ones this tool validates against.
pub const GDPR_ARTICLES: &[(&str, &str)] = &[
    (
        "15",
        "Right of Access - Subject has right to obtain confirmation of data processing and access to personal data",
    ),
    (
        "16",
        "Right to Rectification - Subject has right to correct inaccurate personal data",
    ),
    (
        "17",
        "Right to Erasure (Right to be Forgotten) - Subject has right to request deletion of personal data",
    ),
    (
        "18",
        "Right to Restriction of Processing - Subject has right to restrict processing under certain conditions",
    ),
    (
        "19",
        "Right to Data Portability - Subject has right to receive data in structured, machine-readable format",
    ),
    (
        "20",
        "Right to Object - Subject has right to object to processing for legitimate interests or direct marketing",
    ),
];

pub fn description(article: &str) -> Option<&'static str> {
    GDPR_ARTICLES
        .iter()
        .find(|(id, _)| *id == article)
        .map(|(_, desc)| *desc)
}

/// The id -> description map served by `GET /articles`.
pub fn catalog_json() -> Value {
    let mut map = Map::new();
    for (id, desc) in GDPR_ARTICLES {
        map.insert((*id).to_string(), Value::String((*desc).to_string()));
    }
    Value::Object(map)
}
