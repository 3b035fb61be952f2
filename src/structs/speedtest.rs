use serde::{ Deserialize, Serialize };

// Report printed by the speed-test client in JSON mode. Only the fields we
// reshape are declared.
#[derive(Debug, Deserialize)]
pub struct SpeedTestResponse{
  pub ping: f64,
  pub download: f64, // bits per second
  pub upload: f64, // bits per second
  pub server: ServerInfo
}

#[derive(Debug, Deserialize)]
pub struct ServerInfo{
  pub name: String,
  pub country: String,
  pub sponsor: String,
  pub d: f64 // km
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SpeedTestResult{
  pub ping: f64,
  pub download_speed: f64,
  pub upload_speed: f64,
  pub server: String,
  pub server_country: String,
  pub server_sponsor: String,
  pub server_distance: f64
}
