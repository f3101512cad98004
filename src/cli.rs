use std::path::PathBuf;

use crate::domain::{Amount, FilterCriteria};
use crate::error::FilterError;

const EXPECTED_ARGUMENTS: usize = 4;

#[derive(Debug, PartialEq)]
pub struct Arguments {
    pub path: PathBuf,
    pub criteria: FilterCriteria,
}

/// Reads `<csv_file> <job_category> <min_salary>` from the full argument list,
/// program name included.
pub fn get_arguments(arguments: Vec<String>) -> Result<Arguments, FilterError> {
    if arguments.len() != EXPECTED_ARGUMENTS {
        return Err(FilterError::WrongArgumentCount(
            arguments.len().saturating_sub(1),
        ));
    }

    let raw_salary = &arguments[3];
    let min_salary = Amount::parse(raw_salary)
        .ok_or_else(|| FilterError::InvalidMinSalary(raw_salary.to_owned()))?;

    Ok(Arguments {
        path: PathBuf::from(&arguments[1]),
        criteria: FilterCriteria::new(&arguments[2], min_salary),
    })
}
