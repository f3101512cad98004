use customer_filter::reader::filter_customers;
use customer_filter::{run_with_output, FilterCriteria, FilterError};
use rust_decimal_macros::dec;

const FIXTURE: &str = "tests/customers.csv";

fn run_to_string(args: &[&str]) -> (Result<(), FilterError>, String) {
    let mut out = vec![];
    let arguments = std::iter::once("customer_filter")
        .chain(args.iter().copied())
        .map(String::from)
        .collect();
    let result = run_with_output(arguments, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn filters_fixture_by_category() {
    let all = filter_customers(FIXTURE, &FilterCriteria::new("ALL", dec!(10000)));
    assert_eq!(
        all,
        vec![
            Some(String::from("Allison Hill")),
            Some(String::from("Jonathan White")),
            Some(String::from("Angie Henderson")),
        ]
    );

    let sales = filter_customers(FIXTURE, &FilterCriteria::new("Sales", dec!(10000)));
    assert_eq!(sales, vec![Some(String::from("Angie Henderson"))]);
}

#[test]
fn prints_matching_names_in_order() {
    let (result, output) = run_to_string(&[FIXTURE, "ALL", "10000"]);
    assert!(result.is_ok());
    assert_eq!(output, "Allison Hill\nJonathan White\nAngie Henderson\n");

    let (result, output) = run_to_string(&[FIXTURE, "Public Service", "10000"]);
    assert!(result.is_ok());
    assert_eq!(output, "Jonathan White\n");
}

#[test]
fn threshold_at_exact_salary() {
    let (_, output) = run_to_string(&[FIXTURE, "IT", "9999.99"]);
    assert_eq!(output, "Allison Hill\nDaniel Wagner\n");

    let (_, output) = run_to_string(&[FIXTURE, "IT", "10000"]);
    assert_eq!(output, "Allison Hill\n");
}

#[test]
fn min_salary_beyond_decimal_range() {
    let (result, output) = run_to_string(&[FIXTURE, "ALL", "1e30"]);
    assert!(result.is_ok());
    assert!(output.is_empty());

    let (result, output) = run_to_string(&[FIXTURE, "Sales", "-1e30"]);
    assert!(result.is_ok());
    assert_eq!(output, "Angie Henderson\n");
}

#[test]
fn missing_file_prints_nothing() {
    let (result, output) = run_to_string(&["tests/missing.csv", "ALL", "0"]);
    assert!(result.is_ok());
    assert!(output.is_empty());
}

#[test]
fn argument_errors_print_nothing() {
    let (result, output) = run_to_string(&[FIXTURE, "ALL"]);
    assert!(matches!(result, Err(FilterError::WrongArgumentCount(2))));
    assert!(output.is_empty());

    let (result, output) = run_to_string(&[FIXTURE, "ALL", "lots"]);
    assert!(matches!(result, Err(FilterError::InvalidMinSalary(_))));
    assert!(output.is_empty());
}
