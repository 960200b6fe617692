//! Entrepreneur profile request/response models

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::common::FlexibleValue;
use crate::validation::{Choice, NAME_MAX_LEN, PROFILE_DESCRIPTION_MAX_LEN, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartupStage {
    #[default]
    #[serde(rename = "Idea Stage")]
    IdeaStage,
    Prototype,
    #[serde(rename = "MVP")]
    Mvp,
    #[serde(rename = "Early Stage")]
    EarlyStage,
    #[serde(rename = "Growth Stage")]
    GrowthStage,
    Expansion,
}

impl Choice for StartupStage {
    const ALL: &'static [Self] = &[
        StartupStage::IdeaStage,
        StartupStage::Prototype,
        StartupStage::Mvp,
        StartupStage::EarlyStage,
        StartupStage::GrowthStage,
        StartupStage::Expansion,
    ];

    fn as_str(self) -> &'static str {
        match self {
            StartupStage::IdeaStage => "Idea Stage",
            StartupStage::Prototype => "Prototype",
            StartupStage::Mvp => "MVP",
            StartupStage::EarlyStage => "Early Stage",
            StartupStage::GrowthStage => "Growth Stage",
            StartupStage::Expansion => "Expansion",
        }
    }
}

/// Body of POST /api/entrepreneurs/register
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrepreneurRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<FlexibleValue>,
    pub startup_stage: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
}

/// Validated profile, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntrepreneur {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub startup_stage: StartupStage,
    pub sector: String,
    pub description: Option<String>,
}

impl EntrepreneurRequest {
    pub fn validate(&self) -> Result<NewEntrepreneur, ApiError> {
        let mut v = Validator::new();

        let name = v.required(self.name.as_deref(), "Name");
        v.max_len(name.as_deref(), "Name", NAME_MAX_LEN);
        let email = v.email(self.email.as_deref());
        let phone = v.phone(self.phone.as_ref());
        let sector = v.required(self.sector.as_deref(), "Sector");
        let startup_stage = v.choice(
            self.startup_stage.as_deref(),
            "startup stage",
            StartupStage::default(),
        );
        let description = v.optional(self.description.as_deref());
        v.max_len(description.as_deref(), "Description", PROFILE_DESCRIPTION_MAX_LEN);

        v.finish(|| {
            Some(NewEntrepreneur {
                name: name?,
                email: email?,
                phone: phone?,
                startup_stage: startup_stage?,
                sector: sector?,
                description,
            })
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrepreneurCreated {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Query parameters for GET /api/entrepreneurs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntrepreneurListQuery {
    /// Case-insensitive substring of the sector
    pub sector: Option<String>,
    /// Exact startup stage; unknown stages are ignored
    pub stage: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> EntrepreneurRequest {
        EntrepreneurRequest {
            name: Some(" Asha Rao ".to_string()),
            email: Some("Asha@Example.com".to_string()),
            phone: Some(FlexibleValue::Text("98765-43210".to_string())),
            startup_stage: Some("MVP".to_string()),
            sector: Some("HealthTech".to_string()),
            description: Some("Diagnostics kiosks".to_string()),
        }
    }

    #[test]
    fn test_validate_cleans_fields() {
        let profile = valid_request().validate().unwrap();
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.email, "asha@example.com");
        assert_eq!(profile.phone, "9876543210");
        assert_eq!(profile.startup_stage, StartupStage::Mvp);
    }

    #[test]
    fn test_stage_defaults_to_idea_stage() {
        let request = EntrepreneurRequest {
            startup_stage: None,
            ..valid_request()
        };
        assert_eq!(request.validate().unwrap().startup_stage, StartupStage::IdeaStage);
    }

    #[test]
    fn test_validate_lists_every_missing_field() {
        let err = EntrepreneurRequest::default().validate().unwrap_err();
        match err {
            ApiError::Validation(details) => assert_eq!(
                details,
                [
                    "Name is required",
                    "Email is required",
                    "Phone is required",
                    "Sector is required",
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_stage_serializes_as_display_name() {
        let json = serde_json::to_string(&StartupStage::GrowthStage).unwrap();
        assert_eq!(json, "\"Growth Stage\"");
        assert_eq!(StartupStage::parse("Early Stage"), Some(StartupStage::EarlyStage));
    }
}
