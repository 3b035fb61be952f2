use std::collections::BTreeMap;

use serde::Serialize;

pub const STATUS_ONLINE: &'static str = "Online";
pub const STATUS_ISSUES: &'static str = "Issues";

#[derive(Debug, Serialize)]
pub struct WebsiteStatus{
  pub url: String,
  pub status_code: u16,
  pub status: &'static str,
  pub response_time: f64, // ms
  pub headers: BTreeMap<String, String>
}

impl WebsiteStatus{
  // Only an exact 200 counts as online; redirects that were not followed and
  // other 2xx codes are reported as issues.
  pub fn label( status_code: u16 ) -> &'static str{
    if status_code == 200 { STATUS_ONLINE } else { STATUS_ISSUES }
  }
}
