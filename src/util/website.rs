use std::{ collections::{ btree_map::Entry, BTreeMap }, time::{ Duration, Instant } };

use reqwest::header::HeaderMap;

use crate::{ structs::{ outcome::Outcome, website::WebsiteStatus }, util::time::round2 };

const TIMEOUT: Duration = Duration::from_secs(10);

pub async fn check( url: String ) -> Outcome<WebsiteStatus>{
  log::debug!("Checking {}", url);

  match fetch(&url).await{
    Ok(status) => Outcome::Done(status),
    Err(err) => {
      log::warn!("Website check of {} failed: {:#}", url, err);
      Outcome::failed(format!("{:#}", err))
    }
  }
}

async fn fetch( url: &str ) -> anyhow::Result<WebsiteStatus>{
  let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;

  let started = Instant::now();
  let response = client.get(url).send().await?;

  let status_code = response.status().as_u16();
  let headers = collect_headers(response.headers());

  // the timing covers the whole GET, body included
  response.bytes().await?;
  let elapsed = started.elapsed();

  Ok(WebsiteStatus {
    url: url.to_owned(),
    status_code,
    status: WebsiteStatus::label(status_code),
    response_time: round2(elapsed.as_secs_f64() * 1000.0),
    headers
  })
}

pub fn collect_headers( headers: &HeaderMap ) -> BTreeMap<String, String>{
  let mut map = BTreeMap::new();

  for ( name, value ) in headers{
    let value = String::from_utf8_lossy(value.as_bytes()).into_owned();

    match map.entry(name.as_str().to_owned()){
      Entry::Occupied(mut existing) => {
        let existing: &mut String = existing.get_mut();
        existing.push_str(", ");
        existing.push_str(&value);
      },
      Entry::Vacant(slot) => { slot.insert(value); }
    }
  }

  map
}
