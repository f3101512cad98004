pub mod amount;
pub mod criteria;
pub mod customer;

pub use amount::Amount;
pub use criteria::{FilterCriteria, JobCategory};
pub use customer::CustomerRow;
