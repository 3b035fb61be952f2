pub mod apierror;
pub mod command;
pub mod dns;
pub mod ipinfo;
pub mod networkinfo;
pub mod outcome;
pub mod portcheck;
pub mod report;
pub mod speedtest;
pub mod website;
