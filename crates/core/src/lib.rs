pub mod access_log;
pub mod client_ip;
pub mod error;
pub mod logging;
