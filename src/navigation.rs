pub(crate) mod history;
pub(crate) mod model;
pub(crate) mod router;
pub(crate) mod state;
