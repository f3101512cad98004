use serde::{Deserialize, Deserializer};

use super::amount::Amount;
use crate::error::FilterError;

const CURRENCY_SYMBOL: char = '$';

// CustomerRow is one CSV record, keyed by header name. Absent columns come
// through as None. Empty name and salary cells are None too, while an empty
// category cell stays Some("") so it can be matched by an empty category.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CustomerRow {
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "keep_empty")]
    pub customer_job_category: Option<String>,
    pub customer_salary: Option<String>,
}

fn keep_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl CustomerRow {
    pub fn salary(&self) -> Result<Amount, FilterError> {
        match &self.customer_salary {
            Some(raw) => parse_salary(raw),
            None => Err(FilterError::MissingSalary),
        }
    }

    pub fn job_category(&self) -> Option<&str> {
        self.customer_job_category.as_deref()
    }
}

/// Parses a salary cell, dropping every `$` before reading the number.
pub fn parse_salary(raw: &str) -> Result<Amount, FilterError> {
    let stripped = raw.replace(CURRENCY_SYMBOL, "");
    Amount::parse(&stripped).ok_or_else(|| FilterError::InvalidSalary(raw.to_owned()))
}
