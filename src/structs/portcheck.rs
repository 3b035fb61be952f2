use serde::Serialize;

pub const STATUS_OPEN: &'static str = "Open";
pub const STATUS_CLOSED: &'static str = "Closed/Filtered";

#[derive(Debug, Serialize)]
pub struct PortCheckResult{
  pub host: String,
  pub port: u16,
  pub open: bool,
  pub status: &'static str
}

impl PortCheckResult{
  pub fn new( host: String, port: u16, open: bool ) -> Self{
    Self {
      host,
      port,
      open,
      status: if open { STATUS_OPEN } else { STATUS_CLOSED }
    }
  }
}
