pub(crate) mod error;
pub(crate) mod core;
pub(crate) mod math;
