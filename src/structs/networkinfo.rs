use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NetworkInfo{
  pub hostname: String,
  pub local_ip: String,
  pub platform: String,
  pub processor: String
}
