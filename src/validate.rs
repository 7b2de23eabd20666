use serde::Deserialize;

/// Wire shape of `POST /validate`. Everything is optional so we can report
/// missing fields ourselves instead of bouncing on deserialization.
#[derive(Debug, Deserialize)]
pub struct ValidationRequest {
    pub article: Option<String>,
    pub request_type: Option<String>,
    pub org_response: Option<String>,
    pub response_time: Option<u64>,
    pub additional_context: Option<String>,
}

/// A request that passed the required-field check.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub article: String,
    pub request_type: String,
    pub org_response: String,
    pub response_time: u64,
    pub additional_context: Option<String>,
}

impl ValidationRequest {
    /// Splits into a validated scenario or the names of the missing fields.
    /// An absent or empty string field is missing; `response_time` of 0 is a
    /// present value, not a missing one.
    pub fn into_scenario(self) -> Result<Scenario, Vec<&'static str>> {
        match (
            self.article,
            self.request_type,
            self.org_response,
            self.response_time,
        ) {
            (Some(article), Some(request_type), Some(org_response), Some(response_time))
                if !article.is_empty() && !request_type.is_empty() && !org_response.is_empty() =>
            {
                Ok(Scenario {
                    article,
                    request_type,
                    org_response,
                    response_time,
                    additional_context: self.additional_context,
                })
            }
            (article, request_type, org_response, response_time) => {
                let mut missing = Vec::new();
                if article.as_deref().map_or(true, str::is_empty) {
                    missing.push("article");
                }
                if request_type.as_deref().map_or(true, str::is_empty) {
                    missing.push("request_type");
                }
                if org_response.as_deref().map_or(true, str::is_empty) {
                    missing.push("org_response");
                }
                if response_time.is_none() {
                    missing.push("response_time");
                }
                Err(missing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> ValidationRequest {
        ValidationRequest {
            article: Some("17".to_string()),
            request_type: Some("data_erasure".to_string()),
            org_response: Some("Deleted all records within the window.".to_string()),
            response_time: Some(12),
            additional_context: None,
        }
    }

    #[test]
    fn complete_request_validates() {
        let scenario = full_request().into_scenario().unwrap();
        assert_eq!(scenario.article, "17");
        assert_eq!(scenario.response_time, 12);
    }

    #[test]
    fn missing_response_time_is_rejected() {
        let mut req = full_request();
        req.response_time = None;
        assert_eq!(req.into_scenario().unwrap_err(), vec!["response_time"]);
    }

    #[test]
    fn zero_response_time_counts_as_present() {
        let mut req = full_request();
        req.response_time = Some(0);
        let scenario = req.into_scenario().unwrap();
        assert_eq!(scenario.response_time, 0);
    }

    #[test]
    fn empty_request_names_every_required_field() {
        let req = ValidationRequest {
            article: None,
            request_type: None,
            org_response: None,
            response_time: None,
            additional_context: None,
        };
        assert_eq!(
            req.into_scenario().unwrap_err(),
            vec!["article", "request_type", "org_response", "response_time"]
        );
    }

    #[test]
    fn empty_string_fields_are_rejected() {
        let mut req = full_request();
        req.org_response = Some(String::new());
        assert_eq!(req.into_scenario().unwrap_err(), vec!["org_response"]);

        let req = ValidationRequest {
            article: Some(String::new()),
            request_type: Some(String::new()),
            org_response: Some(String::new()),
            response_time: Some(5),
            additional_context: None,
        };
        assert_eq!(
            req.into_scenario().unwrap_err(),
            vec!["article", "request_type", "org_response"]
        );
    }

    #[test]
    fn additional_context_is_optional() {
        let mut req = full_request();
        req.additional_context = Some("Backup copies retained for legal hold.".to_string());
        let scenario = req.into_scenario().unwrap();
        assert_eq!(
            scenario.additional_context.as_deref(),
            Some("Backup copies retained for legal hold.")
        );
    }
}
