pub(crate) mod ease;
pub(crate) mod landing;
pub(crate) mod phase;
pub(crate) mod timeline;
pub(crate) mod track;
