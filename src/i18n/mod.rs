pub mod countries;

pub use countries::{COUNTRIES, CountryRecord, dial_code_for_region, find_by_region};
