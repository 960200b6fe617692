//! Shapes shared by every collection's request and response models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            message: None,
        }
    }
}

/// A form value that clients send either as a JSON number or as text
/// (phone numbers, amounts typed into inputs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleValue {
    Number(f64),
    Text(String),
}

impl FlexibleValue {
    pub fn to_text(&self) -> String {
        match self {
            FlexibleValue::Number(n) => n.to_string(),
            FlexibleValue::Text(s) => s.clone(),
        }
    }

    /// Numeric value, or `None` when the text does not parse to a finite number.
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            FlexibleValue::Number(n) => Some(*n),
            FlexibleValue::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

/// 201 body for submission endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        Self {
            total,
            page,
            limit,
            pages: total.div_ceil(limit),
        }
    }
}

/// Response for the collection listing endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_value_from_json() {
        let number: FlexibleValue = serde_json::from_str("9876543210").unwrap();
        let text: FlexibleValue = serde_json::from_str("\"50000\"").unwrap();

        assert_eq!(number.to_text(), "9876543210");
        assert_eq!(text.to_number(), Some(50000.0));
    }

    #[test]
    fn test_flexible_value_rejects_non_numeric_text() {
        assert_eq!(FlexibleValue::Text("lots".to_string()).to_number(), None);
        assert_eq!(FlexibleValue::Text("NaN".to_string()).to_number(), None);
    }

    #[test]
    fn test_pagination_rounds_pages_up() {
        let pagination = Pagination::new(101, 1, 50);
        assert_eq!(pagination.pages, 3);
        assert_eq!(Pagination::new(0, 1, 50).pages, 0);
    }
}
