pub(crate) mod listeners;
pub(crate) mod report;
