//! Filtering, sorting and pagination shared by the collection listings.

use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryOrder,
    QuerySelect, Select,
    sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr},
};

use crate::models::common::{ListResponse, Pagination};

pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 1000;
const LIKE_ESCAPE: char = '\\';
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Page/limit after defaults are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Missing or zero values fall back to page 1 / limit 50; limit is capped.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(1),
            limit: limit
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_LIMIT)
                .min(MAX_LIMIT),
        }
    }

    /// Same defaults, for raw query-string values; non-numeric input is ignored.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |v: Option<&str>| filter_text(v).and_then(|v| v.parse::<u64>().ok());
        Self::new(parse(page), parse(limit))
    }

    /// Row offset, capped at the largest value the drivers bind (`i64::MAX`).
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(MAX_OFFSET)
    }
}

/// A `sort` query value such as `fundingNeeded` or `-createdAt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn parse(raw: Option<&str>, default: &str) -> Self {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(default);
        match raw.strip_prefix('-') {
            Some(field) => Self {
                field: field.to_string(),
                descending: true,
            },
            None => Self {
                field: raw.to_string(),
                descending: false,
            },
        }
    }

    pub fn order(&self) -> Order {
        if self.descending { Order::Desc } else { Order::Asc }
    }
}

/// Trimmed filter value, `None` when blank
pub fn filter_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Numeric filter value; anything that does not parse is ignored.
pub fn filter_number(value: Option<&str>) -> Option<f64> {
    filter_text(value)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// `lower(column) LIKE '%needle%'`, with the needle taken literally
pub fn contains_ci<C: IntoColumnRef>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Count the filtered rows, then fetch one sorted page.
///
/// `tie_breaker` keeps page boundaries stable when sort values repeat.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    sort_column: E::Column,
    tie_breaker: E::Column,
    sort: &SortSpec,
    page: PageRequest,
) -> Result<ListResponse<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
{
    let total = select.clone().count(db).await?;

    let data = select
        .order_by(sort_column, sort.order())
        .order_by(tie_breaker, sort.order())
        .offset(page.offset())
        .limit(page.limit)
        .all(db)
        .await?;

    Ok(ListResponse {
        data,
        pagination: Pagination::new(total, page.page, page.limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_defaults() {
        assert_eq!(PageRequest::new(None, None), PageRequest { page: 1, limit: 50 });
        assert_eq!(PageRequest::new(Some(0), Some(0)), PageRequest { page: 1, limit: 50 });
        assert_eq!(PageRequest::new(Some(3), Some(5000)).limit, MAX_LIMIT);
    }

    #[test]
    fn test_page_request_from_query() {
        assert_eq!(
            PageRequest::from_query(Some("2"), Some("10")),
            PageRequest { page: 2, limit: 10 }
        );
        assert_eq!(
            PageRequest::from_query(Some("two"), Some("-5")),
            PageRequest { page: 1, limit: 50 }
        );
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(PageRequest::new(Some(1), Some(20)).offset(), 0);
        assert_eq!(PageRequest::new(Some(3), Some(20)).offset(), 40);
    }

    #[test]
    fn test_page_offset_fits_signed_bind() {
        let page = PageRequest::from_query(Some("18446744073709551615"), Some("2"));
        assert_eq!(page.page, u64::MAX);
        assert_eq!(page.offset(), i64::MAX as u64);

        let page = PageRequest::new(Some(i64::MAX as u64), Some(50));
        assert_eq!(page.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_sort_spec_parse() {
        let sort = SortSpec::parse(Some("-fundingNeeded"), "createdAt");
        assert_eq!(sort.field, "fundingNeeded");
        assert!(sort.descending);

        let sort = SortSpec::parse(None, "-createdAt");
        assert_eq!(sort.field, "createdAt");
        assert!(sort.descending);

        let sort = SortSpec::parse(Some("  "), "createdAt");
        assert!(!sort.descending);
    }

    #[test]
    fn test_filter_number_ignores_junk() {
        assert_eq!(filter_number(Some("1500.5")), Some(1500.5));
        assert_eq!(filter_number(Some("abc")), None);
        assert_eq!(filter_number(Some("")), None);
        assert_eq!(filter_number(None), None);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("fintech"), "fintech");
    }
}
