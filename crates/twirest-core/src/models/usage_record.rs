//! Usage record resource

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::page::{ListItem, ListResponse};
use crate::text;

/// Usage of one category over a date range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "UsageRecord", rename_all = "PascalCase", default)]
pub struct UsageRecordResponse {
    /// e.g. `calls-inbound`, `sms-outbound`, `totalprice`
    pub category: String,
    pub description: String,
    pub account_sid: String,

    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,

    pub usage: String,
    pub usage_unit: String,
    pub count: String,
    pub count_unit: String,
    pub price: String,
    pub price_unit: String,
    pub uri: String,

    #[serde(
        rename = "SubresourceUris",
        alias = "SubResourceUris",
        skip_serializing_if = "Option::is_none"
    )]
    pub subresource_uris: Option<UsageRecordSubresourceUris>,
}

/// Links to the same category over other periods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UsageRecordSubresourceUris {
    pub daily: String,
    pub monthly: String,
    pub yearly: String,
    pub all_time: String,
    pub today: String,
    pub yesterday: String,
    pub this_month: String,
    pub last_month: String,
}

/// Paginated list of usage records
pub type UsageRecordsResponse = ListResponse<UsageRecordResponse>;

impl ListItem for UsageRecordResponse {
    const ELEMENT: &'static str = "UsageRecord";
}

impl UsageRecordResponse {
    pub fn start_date_on(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }

    pub fn end_date_on(&self) -> Option<NaiveDate> {
        parse_day(&self.end_date)
    }

    /// Usage amount; fractional for some categories (e.g. minutes)
    pub fn usage_amount(&self) -> Option<Decimal> {
        text::parse_decimal(&self.usage)
    }

    pub fn count_amount(&self) -> Option<Decimal> {
        text::parse_decimal(&self.count)
    }

    pub fn price_amount(&self) -> Option<Decimal> {
        text::parse_decimal(&self.price)
    }
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usage_accessors() {
        let record = UsageRecordResponse {
            category: "calls".to_string(),
            start_date: "2012-09-01".to_string(),
            end_date: "2012-09-30".to_string(),
            usage: "3279".to_string(),
            count: "1324".to_string(),
            price: "48.10".to_string(),
            ..Default::default()
        };
        assert_eq!(
            record.start_date_on(),
            NaiveDate::from_ymd_opt(2012, 9, 1)
        );
        assert_eq!(record.end_date_on(), NaiveDate::from_ymd_opt(2012, 9, 30));
        assert_eq!(record.usage_amount(), Some(dec!(3279)));
        assert_eq!(record.count_amount(), Some(dec!(1324)));
        assert_eq!(record.price_amount(), Some(dec!(48.10)));
    }

    #[test]
    fn test_bad_dates() {
        let record = UsageRecordResponse {
            start_date: "Sep 1".to_string(),
            ..Default::default()
        };
        assert!(record.start_date_on().is_none());
        assert!(record.end_date_on().is_none());
    }
}
