pub mod api;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
