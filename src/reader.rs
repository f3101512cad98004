use csv::Reader;
use csv::{ReaderBuilder, Trim};
use log::{error, warn};
use std::{fs::File, io, path::Path};

use crate::domain::{CustomerRow, FilterCriteria};
use crate::error::FilterError;

pub fn get_reader<P: AsRef<Path>>(path: P) -> Result<Reader<File>, FilterError> {
    let rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    Ok(rdr)
}

/// Returns the names of the customers in `rdr` that satisfy `criteria`, in
/// input order.
///
/// Rows whose salary is missing or not a number, and records the CSV parser
/// rejects, are logged and skipped. A passing row without a name still
/// yields a `None` entry.
pub fn filter_customers_from_reader<R>(
    rdr: &mut Reader<R>,
    criteria: &FilterCriteria,
) -> Vec<Option<String>>
where
    R: io::Read,
{
    let mut names = Vec::new();
    for (index, result) in rdr.deserialize::<CustomerRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                warn!("Skipping row {} due to malformed record: {}", index + 1, err);
                continue;
            }
        };

        let salary = match row.salary() {
            Ok(salary) => salary,
            Err(err) => {
                warn!("Skipping row {} due to invalid salary: {}", index + 1, err);
                continue;
            }
        };

        if !criteria.accepts(salary, row.job_category()) {
            continue;
        }

        names.push(row.customer_name);
    }
    names
}

/// Opens `path` as a headed CSV file and filters its rows. A file that
/// cannot be opened is logged and treated as having no matches.
pub fn filter_customers<P: AsRef<Path>>(
    path: P,
    criteria: &FilterCriteria,
) -> Vec<Option<String>> {
    let path = path.as_ref();
    match get_reader(path) {
        Ok(mut rdr) => filter_customers_from_reader(&mut rdr, criteria),
        Err(err) => {
            error!("{}: {} ({})", open_failure(&err), path.display(), err);
            Vec::new()
        }
    }
}

fn open_failure(err: &FilterError) -> &'static str {
    match err {
        FilterError::Csv(csv_err) => match csv_err.kind() {
            csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                "CSV file not found"
            }
            _ => "Cannot open CSV file",
        },
        _ => "Cannot open CSV file",
    }
}
