//! Low-level helpers shared by the encode and decode directions.

pub(crate) mod bits;
