/// Checked integer helpers.
///
/// This module provides the conversions and sign operations that must never
/// wrap silently: parsing literals into `i64` and negating values.
///
/// All functions return a `Result`, which is `Ok` if the operation is exact,
/// or an error if the value is out of range.
pub mod num;
