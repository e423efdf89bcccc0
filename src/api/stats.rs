use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::error::Error;

impl ClouDnsClient {
    /// Query counts per hour of the given day.
    pub async fn hourly_stats(&self, domain_name: &str, day: u8, month: u8, year: u16) -> Result<Value, Error> {
        let params = domain(domain_name)
            .with("day", day)
            .with("month", month)
            .with("year", year);
        self.get("dns/statistics-hourly.json", params).await
    }

    pub async fn daily_stats(&self, domain_name: &str, month: u8, year: u16) -> Result<Value, Error> {
        let params = domain(domain_name).with("month", month).with("year", year);
        self.get("dns/statistics-daily.json", params).await
    }

    pub async fn monthly_stats(&self, domain_name: &str, year: u16) -> Result<Value, Error> {
        let params = domain(domain_name).with("year", year);
        self.get("dns/statistics-monthly.json", params).await
    }

    pub async fn yearly_stats(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/statistics-yearly.json", domain(domain_name)).await
    }

    pub async fn last_30_days_stats(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/statistics-last-30-days.json", domain(domain_name))
            .await
    }
}
