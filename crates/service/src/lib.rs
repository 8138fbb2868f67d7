//! Service layer providing product operations on top of models.
//! - Separates request-facing logic from data access.
//! - Reuses entity definitions and store functions in `models` crate.
//! - Turns absent rows into `ServiceError::NotFound`.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
