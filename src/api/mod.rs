pub mod dns;
pub mod home;
pub mod networkinfo;
pub mod ping;
pub mod portscan;
pub mod speedtest;
pub mod traceroute;
pub mod website;
