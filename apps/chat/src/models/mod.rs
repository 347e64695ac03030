pub mod message;
pub mod resume;
