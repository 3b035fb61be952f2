use std::time::Duration;

use crate::structs::{ ipinfo::IPInfo, outcome::Outcome };

const TIMEOUT: Duration = Duration::from_secs(10);

pub async fn lookup( url: String ) -> Outcome<IPInfo>{
  log::debug!("Looking up public IP info via {}", url);

  match fetch(&url).await{
    Ok(info) => Outcome::Done(info),
    Err(err) => {
      log::warn!("IP info lookup against {} failed: {:#}", url, err);
      Outcome::failed(format!("IP info failed: {:#}", err))
    }
  }
}

async fn fetch( url: &str ) -> anyhow::Result<IPInfo>{
  let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
  let body = client.get(url).send().await?.error_for_status()?.text().await?;

  Ok(serde_json::from_str(&body)?)
}
