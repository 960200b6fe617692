//! Idea submission request/response models

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::common::FlexibleValue;
use crate::validation::{
    Choice, FUNDING_RULE, IDEA_DESCRIPTION_MAX_LEN, NAME_MAX_LEN, TITLE_MAX_LEN, Validator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IdeaStatus {
    #[default]
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Approved,
    Rejected,
}

impl Choice for IdeaStatus {
    const ALL: &'static [Self] = &[
        IdeaStatus::Submitted,
        IdeaStatus::UnderReview,
        IdeaStatus::Approved,
        IdeaStatus::Rejected,
    ];

    fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "Submitted",
            IdeaStatus::UnderReview => "Under Review",
            IdeaStatus::Approved => "Approved",
            IdeaStatus::Rejected => "Rejected",
        }
    }
}

/// Body of POST /api/ideas/submit
///
/// `status` is not accepted from clients: every idea starts as `Submitted`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRequest {
    pub entrepreneur_name: Option<String>,
    pub idea_title: Option<String>,
    pub description: Option<String>,
    pub funding_needed: Option<FlexibleValue>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewIdea {
    pub entrepreneur_name: String,
    pub idea_title: String,
    pub description: String,
    pub funding_needed: f64,
    pub email: String,
}

impl IdeaRequest {
    pub fn validate(&self) -> Result<NewIdea, ApiError> {
        let mut v = Validator::new();

        let entrepreneur_name = v.required(self.entrepreneur_name.as_deref(), "Entrepreneur name");
        v.max_len(entrepreneur_name.as_deref(), "Name", NAME_MAX_LEN);
        let idea_title = v.required(self.idea_title.as_deref(), "Idea title");
        v.max_len(idea_title.as_deref(), "Title", TITLE_MAX_LEN);
        let description = v.required(self.description.as_deref(), "Description");
        v.max_len(description.as_deref(), "Description", IDEA_DESCRIPTION_MAX_LEN);
        let email = v.email(self.email.as_deref());
        let funding_needed = v.amount(self.funding_needed.as_ref(), &FUNDING_RULE);

        v.finish(|| {
            Some(NewIdea {
                entrepreneur_name: entrepreneur_name?,
                idea_title: idea_title?,
                description: description?,
                funding_needed: funding_needed?,
                email: email?,
            })
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaCreated {
    pub id: i32,
    pub title: String,
    pub entrepreneur: String,
}

/// Query parameters for GET /api/ideas
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaListQuery {
    pub min_funding: Option<String>,
    pub max_funding: Option<String>,
    /// Case-insensitive substring of the entrepreneur name
    pub entrepreneur: Option<String>,
    /// Defaults to `Submitted`; `all` or an unknown status lists every idea
    pub status: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl IdeaListQuery {
    /// Status to filter on, if any
    pub fn status_filter(&self) -> Option<IdeaStatus> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Some(IdeaStatus::Submitted),
            Some(status) => IdeaStatus::parse(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_parses_string_amount() {
        let request = IdeaRequest {
            entrepreneur_name: Some("Asha Rao".to_string()),
            idea_title: Some("ScanCare".to_string()),
            description: Some("AI-powered healthcare diagnostics".to_string()),
            funding_needed: Some(FlexibleValue::Text("50000".to_string())),
            email: Some("asha@example.com".to_string()),
        };
        let idea = request.validate().unwrap();
        assert_eq!(idea.funding_needed, 50000.0);
    }

    #[test]
    fn test_validate_rejects_long_title_and_low_funding() {
        let request = IdeaRequest {
            entrepreneur_name: Some("Asha Rao".to_string()),
            idea_title: Some("x".repeat(201)),
            description: Some("Too small".to_string()),
            funding_needed: Some(FlexibleValue::Number(500.0)),
            email: Some("asha@example.com".to_string()),
        };
        match request.validate().unwrap_err() {
            ApiError::Validation(details) => assert_eq!(
                details,
                [
                    "Title cannot exceed 200 characters",
                    "Minimum funding amount is ₹1,000",
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_filter() {
        let mut query = IdeaListQuery::default();
        assert_eq!(query.status_filter(), Some(IdeaStatus::Submitted));

        query.status = Some("Under Review".to_string());
        assert_eq!(query.status_filter(), Some(IdeaStatus::UnderReview));

        query.status = Some("all".to_string());
        assert_eq!(query.status_filter(), None);

        query.status = Some("archived".to_string());
        assert_eq!(query.status_filter(), None);
    }
}
