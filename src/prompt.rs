use crate::articles;
use crate::validate::Scenario;

/// Builds the compliance-analysis prompt for one scenario. Pure string
/// formatting: same inputs always give the same prompt. An article id outside
/// the catalog gets an "Unknown article" context line instead of an error.
pub fn build_prompt(scenario: &Scenario) -> String {
    let context = articles::description(&scenario.article).unwrap_or("Unknown article");
    let additional_context = scenario
        .additional_context
        .as_deref()
        .unwrap_or("None provided");

    format!(
        "You are a GDPR compliance expert. Analyze the following request/response scenario and validate compliance with GDPR Article {article}.\n\
         \n\
         Article {article} Context: {context}\n\
         \n\
         Scenario:\n\
         Request Type: {request_type}\n\
         Organization Response: {org_response}\n\
         Response Time: {response_time} days\n\
         Additional Context: {additional_context}\n\
         \n\
         Provide a detailed compliance validation including:\n\
         1. Compliance Status (Compliant/Non-Compliant/Partially Compliant)\n\
         2. Key Requirements Met\n\
         3. Key Requirements Missed (if any)\n\
         4. Specific Recommendations\n\
         5. Risk Level (Low/Medium/High)\n\
         \n\
         Format your response as JSON with keys: status, requirements_met, requirements_missed, recommendations, risk_level, explanation",
        article = scenario.article,
        context = context,
        request_type = scenario.request_type,
        org_response = scenario.org_response,
        response_time = scenario.response_time,
        additional_context = additional_context,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(article: &str) -> Scenario {
        Scenario {
            article: article.to_string(),
            request_type: "data_access".to_string(),
            org_response: "Provided a full export within the deadline.".to_string(),
            response_time: 25,
            additional_context: Some("First request from this subject.".to_string()),
        }
    }

    #[test]
    fn prompt_contains_request_values_and_catalog_context() {
        let prompt = build_prompt(&scenario("15"));
        assert!(prompt.contains("GDPR Article 15"));
        assert!(prompt.contains("Right of Access"));
        assert!(prompt.contains("Request Type: data_access"));
        assert!(prompt.contains("Organization Response: Provided a full export within the deadline."));
        assert!(prompt.contains("Response Time: 25 days"));
        assert!(prompt.contains("Additional Context: First request from this subject."));
    }

    #[test]
    fn unknown_article_gets_placeholder_context() {
        let prompt = build_prompt(&scenario("99"));
        assert!(prompt.contains("Article 99 Context: Unknown article"));
    }

    #[test]
    fn absent_additional_context_renders_none_provided() {
        let mut s = scenario("16");
        s.additional_context = None;
        let prompt = build_prompt(&s);
        assert!(prompt.contains("Additional Context: None provided"));
    }

    #[test]
    fn identical_inputs_give_identical_prompts() {
        let s = scenario("18");
        assert_eq!(build_prompt(&s), build_prompt(&s));
    }

    #[test]
    fn prompt_asks_for_the_six_json_keys() {
        let prompt = build_prompt(&scenario("17"));
        assert!(prompt.contains(
            "JSON with keys: status, requirements_met, requirements_missed, recommendations, risk_level, explanation"
        ));
    }
}
