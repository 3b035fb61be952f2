pub mod command;
pub mod cors;
pub mod dns;
pub mod ipinfo;
pub mod lenient;
pub mod logger;
pub mod netinfo;
pub mod port;
pub mod speedtest;
pub mod task;
pub mod time;
pub mod website;
