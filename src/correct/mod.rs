pub(crate) mod replace;
pub(crate) mod residual;
pub(crate) mod spill;
pub(crate) mod tone;
