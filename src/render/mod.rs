pub(crate) mod debug;
pub(crate) mod kernel;
pub(crate) mod plane;
