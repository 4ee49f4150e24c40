pub(crate) mod exception;
pub(crate) mod mask;
pub(crate) mod pixel;
