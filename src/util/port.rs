use std::{ net::SocketAddr, time::Duration };

use anyhow::Context;
use tokio::{ net::{ lookup_host, TcpStream }, time };

use crate::structs::{ outcome::Outcome, portcheck::PortCheckResult };

const TIMEOUT: Duration = Duration::from_secs(5);

// refused and timed-out connects both count as closed
pub async fn check( host: String, port: u16 ) -> Outcome<PortCheckResult>{
  log::debug!("Checking {}:{}", host, port);

  match connect(&host, port).await{
    Ok(open) => Outcome::Done(PortCheckResult::new(host, port, open)),
    Err(err) => {
      log::warn!("Port check of {}:{} failed: {:#}", host, port, err);
      Outcome::failed(format!("{:#}", err))
    }
  }
}

async fn connect( host: &str, port: u16 ) -> anyhow::Result<bool>{
  let addr = lookup_host(( host, port )).await?
    .find(SocketAddr::is_ipv4)
    .with_context(|| format!("{} has no IPv4 address", host))?;

  // the stream, if any, is dropped (closed) right here
  Ok(matches!(time::timeout(TIMEOUT, TcpStream::connect(addr)).await, Ok(Ok(_))))
}
