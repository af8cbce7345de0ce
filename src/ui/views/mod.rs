pub mod complete;
#[cfg(debug_assertions)]
pub mod debug;
pub mod question;
pub mod quiz;
