use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Usage: customer_filter <csv_file> <job_category> <min_salary> (got {0} arguments)")]
    WrongArgumentCount(usize),

    #[error("Minimum salary must be a number: {0:?}")]
    InvalidMinSalary(String),

    #[error("Invalid salary {0:?}")]
    InvalidSalary(String),

    #[error("Missing salary")]
    MissingSalary,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
