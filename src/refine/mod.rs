pub(crate) mod blur;
pub(crate) mod detail;
pub(crate) mod morph;
pub(crate) mod pipeline;
