pub(crate) mod header;
pub(crate) mod line;
