use std::{ env, sync::Arc };

use thiserror::Error;

const DEFAULT_HOST: &'static str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_IPINFO_URL: &'static str = "http://ipinfo.io/json";
const DEFAULT_SPEEDTEST_CMD: &'static str = "speedtest-cli --json";

#[derive(Error, Debug)]
pub enum ConfigError{
  #[error("PORT must be a number between 0 and 65535, got {0:?}")]
  InvalidPort(String),

  #[error("SPEEDTEST_CMD must name a program")]
  EmptySpeedtestCommand
}

#[derive(Debug, Clone)]
pub struct Config{
  pub host: String,
  pub port: u16,
  pub ipinfo_url: String,
  pub speedtest_command: Vec<String>,
  pub allowed_origins: Vec<String>
}

impl Config{
  pub fn from_env() -> Result<Self, ConfigError>{
    Self::from_lookup(| key | env::var(key).ok())
  }

  pub fn from_lookup<F>( lookup: F ) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>
  {
    let port = match lookup("PORT"){
      Some(raw) => raw.trim().parse::<u16>().map_err(| _ | ConfigError::InvalidPort(raw.clone()))?,
      None => DEFAULT_PORT
    };

    let speedtest_command: Vec<String> = lookup("SPEEDTEST_CMD")
      .unwrap_or_else(|| DEFAULT_SPEEDTEST_CMD.into())
      .split_whitespace()
      .map(str::to_owned)
      .collect();

    if speedtest_command.is_empty(){ return Err(ConfigError::EmptySpeedtestCommand) }

    let allowed_origins = lookup("ALLOWED_ORIGINS")
      .map(| origins | {
        origins.split(',')
          .map(| origin | origin.trim().to_owned())
          .filter(| origin | !origin.is_empty())
          .collect()
      })
      .unwrap_or_default();

    Ok(Self {
      host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
      port,
      ipinfo_url: lookup("IPINFO_URL").unwrap_or_else(|| DEFAULT_IPINFO_URL.into()),
      speedtest_command,
      allowed_origins
    })
  }

  pub fn bind_addr( &self ) -> String{
    format!("{}:{}", self.host, self.port)
  }
}

impl Default for Config{
  fn default() -> Self{
    Self {
      host: DEFAULT_HOST.into(),
      port: DEFAULT_PORT,
      ipinfo_url: DEFAULT_IPINFO_URL.into(),
      speedtest_command: DEFAULT_SPEEDTEST_CMD.split_whitespace().map(str::to_owned).collect(),
      allowed_origins: Vec::new()
    }
  }
}

// Holds configuration only. Checks open their own sockets and clients per call.
#[derive(Debug)]
pub struct AppHandler{
  pub config: Config
}

impl AppHandler{
  pub fn new() -> anyhow::Result<Arc<Self>>{
    Ok(Self::with_config(Config::from_env()?))
  }

  pub fn with_config( config: Config ) -> Arc<Self>{
    Arc::new(Self { config })
  }
}

#[cfg(test)]
mod tests{
  use std::collections::HashMap;

  use super::*;

  fn lookup_from( pairs: &[( &str, &str )] ) -> impl Fn(&str) -> Option<String>{
    let map: HashMap<String, String> = pairs.iter()
      .map(| ( k, v ) | ( k.to_string(), v.to_string() ))
      .collect();

    move | key | map.get(key).cloned()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set(){
    let config = Config::from_lookup(| _ | None).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    assert_eq!(config.ipinfo_url, "http://ipinfo.io/json");
    assert_eq!(config.speedtest_command, vec![ "speedtest-cli", "--json" ]);
    assert!(config.allowed_origins.is_empty());
  }

  #[test]
  fn reads_overrides(){
    let config = Config::from_lookup(lookup_from(&[
      ( "HOST", "0.0.0.0" ),
      ( "PORT", "8080" ),
      ( "SPEEDTEST_CMD", "  speedtest --format=json  " ),
      ( "ALLOWED_ORIGINS", "https://a.example, ,https://b.example" )
    ])).unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.speedtest_command, vec![ "speedtest", "--format=json" ]);
    assert_eq!(config.allowed_origins, vec![ "https://a.example", "https://b.example" ]);
  }

  #[test]
  fn rejects_bad_port(){
    let err = Config::from_lookup(lookup_from(&[ ( "PORT", "http" ) ])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
  }

  #[test]
  fn rejects_blank_speedtest_command(){
    let err = Config::from_lookup(lookup_from(&[ ( "SPEEDTEST_CMD", "   " ) ])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySpeedtestCommand));
  }
}
