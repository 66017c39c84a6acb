//! Row types mapped from database tables.

pub mod sales_summary;
