pub mod dispatcher;
pub mod error;
pub mod message;
pub mod parser;
pub mod time;
