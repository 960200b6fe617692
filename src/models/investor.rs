//! Investor profile request/response models

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::common::FlexibleValue;
use crate::validation::{CAPACITY_RULE, Choice, NAME_MAX_LEN, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvestmentType {
    Angel,
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    Growth,
    #[default]
    Any,
}

impl Choice for InvestmentType {
    const ALL: &'static [Self] = &[
        InvestmentType::Angel,
        InvestmentType::Seed,
        InvestmentType::SeriesA,
        InvestmentType::SeriesB,
        InvestmentType::Growth,
        InvestmentType::Any,
    ];

    fn as_str(self) -> &'static str {
        match self {
            InvestmentType::Angel => "Angel",
            InvestmentType::Seed => "Seed",
            InvestmentType::SeriesA => "Series A",
            InvestmentType::SeriesB => "Series B",
            InvestmentType::Growth => "Growth",
            InvestmentType::Any => "Any",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl Choice for RiskTolerance {
    const ALL: &'static [Self] = &[RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High];

    fn as_str(self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }
}

/// Body of POST /api/investors/proposals
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<FlexibleValue>,
    pub investment_capacity: Option<FlexibleValue>,
    pub sector_interest: Option<String>,
    pub investment_type: Option<String>,
    pub risk_tolerance: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub investment_capacity: f64,
    pub sector_interest: String,
    pub investment_type: InvestmentType,
    pub risk_tolerance: RiskTolerance,
}

impl InvestorRequest {
    pub fn validate(&self) -> Result<NewInvestor, ApiError> {
        let mut v = Validator::new();

        let name = v.required(self.name.as_deref(), "Name");
        v.max_len(name.as_deref(), "Name", NAME_MAX_LEN);
        let email = v.email(self.email.as_deref());
        let phone = v.phone(self.phone.as_ref());
        let sector_interest = v.required(self.sector_interest.as_deref(), "Sector interest");
        let investment_capacity = v.amount(self.investment_capacity.as_ref(), &CAPACITY_RULE);
        let investment_type = v.choice(
            self.investment_type.as_deref(),
            "investment type",
            InvestmentType::default(),
        );
        let risk_tolerance = v.choice(
            self.risk_tolerance.as_deref(),
            "risk tolerance",
            RiskTolerance::default(),
        );

        v.finish(|| {
            Some(NewInvestor {
                name: name?,
                email: email?,
                phone: phone?,
                investment_capacity: investment_capacity?,
                sector_interest: sector_interest?,
                investment_type: investment_type?,
                risk_tolerance: risk_tolerance?,
            })
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorCreated {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub investment_capacity: f64,
}

/// Query parameters for GET /api/investors
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorListQuery {
    pub min_capacity: Option<String>,
    pub max_capacity: Option<String>,
    /// Case-insensitive substring of the sector interest
    pub sector: Option<String>,
    pub investment_type: Option<String>,
    pub risk_tolerance: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> InvestorRequest {
        InvestorRequest {
            name: Some("Vikram Shah".to_string()),
            email: Some("vikram@fund.in".to_string()),
            phone: Some(FlexibleValue::Number(9123456780.0)),
            investment_capacity: Some(FlexibleValue::Number(100000.0)),
            sector_interest: Some("healthcare".to_string()),
            investment_type: None,
            risk_tolerance: Some("High".to_string()),
        }
    }

    #[test]
    fn test_validate_applies_defaults() {
        let investor = valid_request().validate().unwrap();
        assert_eq!(investor.investment_type, InvestmentType::Any);
        assert_eq!(investor.risk_tolerance, RiskTolerance::High);
        assert_eq!(investor.phone, "9123456780");
    }

    #[test]
    fn test_validate_rejects_unknown_enum_and_capacity() {
        let request = InvestorRequest {
            investment_type: Some("Series Z".to_string()),
            investment_capacity: Some(FlexibleValue::Number(5e10)),
            ..valid_request()
        };
        match request.validate().unwrap_err() {
            ApiError::Validation(details) => assert_eq!(
                details,
                [
                    "Maximum investment capacity is ₹1000 crores",
                    "Series Z is not a valid investment type",
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
