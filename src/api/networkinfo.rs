use std::sync::Arc;

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };

use crate::{
  apphandler::AppHandler,
  structs::{ apierror::APIError, report::NetworkReport },
  util::{ cors, ipinfo, netinfo, task::guarded, time::timestamp }
};

pub async fn get(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);
  let ipinfo_url = app.config.ipinfo_url.clone();

  let report = guarded(&origin, async move {
    NetworkReport {
      ip_info: ipinfo::lookup(ipinfo_url).await,
      network_info: netinfo::local().await,
      timestamp: timestamp()
    }
  }).await?;

  Ok((
    StatusCode::OK,
    cors::headers(origin, "GET"),
    Json(report)
  ))
}
