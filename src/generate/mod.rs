pub mod dispatch;
pub mod prompt;
pub mod service;
