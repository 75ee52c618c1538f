pub mod movie;
pub mod response;
pub mod token;
pub mod user;
