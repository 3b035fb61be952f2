use std::{ collections::BTreeSet, net::IpAddr };

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DnsResult{
  pub domain: String,
  pub ips: Vec<String>,
  pub count: usize
}

impl DnsResult{
  // getaddrinfo reports one address per socket type
  pub fn new( domain: String, addrs: impl IntoIterator<Item = IpAddr> ) -> Self{
    let ips: Vec<String> = addrs.into_iter()
      .collect::<BTreeSet<_>>()
      .into_iter()
      .map(| ip | ip.to_string())
      .collect();

    Self {
      domain,
      count: ips.len(),
      ips
    }
  }
}
