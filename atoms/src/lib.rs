pub mod groups;
pub mod images;
pub mod payload;

#[cfg(test)]
pub(crate) mod testing;
