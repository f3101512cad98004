use super::amount::Amount;

/// Job category value that disables the category check.
pub const ALL_CATEGORIES: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobCategory {
    All,
    Only(String),
}

impl JobCategory {
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            JobCategory::All => true,
            JobCategory::Only(expected) => category == Some(expected.as_str()),
        }
    }
}

impl From<&str> for JobCategory {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            JobCategory::All
        } else {
            JobCategory::Only(value.to_owned())
        }
    }
}

// FilterCriteria holds what a row must satisfy to be reported
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub job_category: JobCategory,
    pub min_salary: Amount,
}

impl FilterCriteria {
    pub fn new<A: Into<Amount>>(job_category: &str, min_salary: A) -> Self {
        Self {
            job_category: JobCategory::from(job_category),
            min_salary: min_salary.into(),
        }
    }

    /// Salary is exclusive: a row earning exactly `min_salary` does not pass.
    pub fn accepts(&self, salary: Amount, category: Option<&str>) -> bool {
        salary > self.min_salary && self.job_category.matches(category)
    }
}
