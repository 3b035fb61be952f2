use std::net::IpAddr;

use tokio::task;

use crate::structs::{ dns::DnsResult, outcome::Outcome };

pub async fn lookup( domain: String ) -> Outcome<DnsResult>{
  log::debug!("Resolving {}", domain);

  match resolve(domain.clone()).await{
    Ok(addrs) => Outcome::Done(DnsResult::new(domain, addrs)),
    Err(err) => {
      log::warn!("DNS lookup of {} failed: {:#}", domain, err);
      Outcome::failed(format!("{:#}", err))
    }
  }
}

// getaddrinfo blocks, so it runs on the blocking pool.
async fn resolve( domain: String ) -> anyhow::Result<Vec<IpAddr>>{
  Ok(task::spawn_blocking(move || dns_lookup::lookup_host(&domain)).await??)
}
