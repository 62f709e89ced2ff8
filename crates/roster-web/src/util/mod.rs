pub mod http;
pub mod number;
