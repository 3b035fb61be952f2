use serde::Serialize;

use super::{ ipinfo::IPInfo, networkinfo::NetworkInfo, outcome::Outcome, speedtest::SpeedTestResult };

#[derive(Debug, Serialize)]
pub struct SpeedTestReport{
  pub ip_info: Outcome<IPInfo>,
  pub network_info: Outcome<NetworkInfo>,
  pub speed_results: SpeedTestResult,
  pub test_duration: f64, // seconds
  pub timestamp: String
}

#[derive(Debug, Serialize)]
pub struct NetworkReport{
  pub ip_info: Outcome<IPInfo>,
  pub network_info: Outcome<NetworkInfo>,
  pub timestamp: String
}
