use std::{ sync::Arc, time::Instant };

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };

use crate::{
  apphandler::AppHandler,
  structs::{ apierror::APIError, report::SpeedTestReport },
  util::{ cors, ipinfo, netinfo, speedtest, task::guarded, time::{ round2, timestamp } }
};

pub async fn get(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);

  let report = guarded(&origin, aggregate(app.clone())).await?
    .map_err(| err | APIError::internal(format!("{:#}", err), origin.clone()))?;

  Ok((
    StatusCode::OK,
    cors::headers(origin, "GET"),
    Json(report)
  ))
}

// The speed test runs first and is the only step allowed to fail the request.
async fn aggregate( app: Arc<AppHandler> ) -> anyhow::Result<SpeedTestReport>{
  let started = Instant::now();

  let speed_results = speedtest::perform(app.config.speedtest_command.clone()).await?;
  let ip_info = ipinfo::lookup(app.config.ipinfo_url.clone()).await;
  let network_info = netinfo::local().await;

  Ok(SpeedTestReport {
    ip_info,
    network_info,
    speed_results,
    test_duration: round2(started.elapsed().as_secs_f64()),
    timestamp: timestamp()
  })
}
