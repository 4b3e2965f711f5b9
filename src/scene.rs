pub(crate) mod binder;
pub(crate) mod props;
