pub mod app_state;
pub mod console;
pub mod menu;

#[cfg(test)]
pub mod test_support;
