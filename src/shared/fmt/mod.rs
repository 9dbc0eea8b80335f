//! Display formatting for dashboard values.
//!
//! Every formatter is total: non-numeric or empty input formats as zero.

pub mod age;
pub mod ident;
pub mod magnitude;
pub mod num;

pub use age::{relative_age, relative_age_at};
pub use ident::truncate;
pub use magnitude::{format_amount, format_base_units_volume, format_magnitude, format_usd_price};
pub use num::{format_block_height, format_count, group_thousands};
