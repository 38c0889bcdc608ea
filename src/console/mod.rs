pub mod prompt;
pub mod session;
