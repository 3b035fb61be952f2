use std::{ env, net::IpAddr };

use anyhow::Context;
use tokio::task;

use crate::structs::{ networkinfo::NetworkInfo, outcome::Outcome };

pub async fn local() -> Outcome<NetworkInfo>{
  let result = task::spawn_blocking(collect).await
    .map_err(anyhow::Error::from)
    .and_then(| collected | collected);

  if let Err(err) = &result{
    log::warn!("Local network info failed: {:#}", err);
  }

  Outcome::from(result)
}

fn collect() -> anyhow::Result<NetworkInfo>{
  let hostname = dns_lookup::get_hostname().context("could not read hostname")?;

  let local_ip = dns_lookup::lookup_host(&hostname)
    .with_context(|| format!("could not resolve {}", hostname))?
    .into_iter()
    .find(IpAddr::is_ipv4)
    .with_context(|| format!("{} has no IPv4 address", hostname))?;

  Ok(NetworkInfo {
    hostname,
    local_ip: local_ip.to_string(),
    platform: platform_name(env::consts::OS),
    processor: env::consts::ARCH.to_owned()
  })
}

pub fn platform_name( os: &str ) -> String{
  match os{
    "linux" => "Linux",
    "windows" => "Windows",
    "macos" => "Darwin",
    "freebsd" => "FreeBSD",
    "netbsd" => "NetBSD",
    "openbsd" => "OpenBSD",
    other => other
  }.to_owned()
}

#[cfg(test)]
mod tests{
  use super::*;

  #[test]
  fn uses_conventional_system_names(){
    assert_eq!(platform_name("linux"), "Linux");
    assert_eq!(platform_name("macos"), "Darwin");
    assert_eq!(platform_name("windows"), "Windows");
    assert_eq!(platform_name("solaris"), "solaris");
  }

  // Hostname resolution depends on the machine, so either shape is fine here.
  #[tokio::test]
  async fn reports_local_platform_or_embeds_error(){
    match local().await{
      Outcome::Done(info) => {
        assert!(!info.hostname.is_empty());
        assert!(info.local_ip.parse::<std::net::Ipv4Addr>().is_ok(), "{}", info.local_ip);
        assert_eq!(info.processor, env::consts::ARCH);
      },
      Outcome::Failed { error } => assert!(!error.is_empty())
    }
  }
}
