mod domain;
pub mod cli;
pub mod error;
pub mod reader;
pub mod writer;

use std::io::{self, Write};

use log::debug;

pub use domain::{Amount, CustomerRow, FilterCriteria, JobCategory};
pub use error::FilterError;

use cli::get_arguments;
use reader::filter_customers;
use writer::write_names;

/// Application runner
///
/// Receives the process arguments (`<csv_file> <job_category> <min_salary>`,
/// preceded by the program name), filters the customers in the CSV file and
/// prints the matching names to stdout, one per line.
///
/// ```
/// let args = ["customer_filter", "tests/customers.csv", "IT", "10000"];
/// let result = customer_filter::run(args.iter().map(|a| a.to_string()).collect());
/// assert!(result.is_ok());
/// ```
pub fn run(arguments: Vec<String>) -> Result<(), FilterError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(arguments, &mut out)
}

/// Same as [`run`], writing the names to `out`. Nothing is written when the
/// arguments are rejected.
pub fn run_with_output<W: Write>(arguments: Vec<String>, out: &mut W) -> Result<(), FilterError> {
    let args = get_arguments(arguments)?;
    debug!("Filtering {} with {:?}", args.path.display(), args.criteria);

    let names = filter_customers(&args.path, &args.criteria);
    debug!("{} customer(s) matched", names.len());

    write_names(out, &names)?;
    Ok(())
}
