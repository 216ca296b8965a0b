pub mod card;
pub mod error;
pub mod history;
pub mod reader;
pub mod request;
pub mod response;
pub mod validator;
pub mod writer;
