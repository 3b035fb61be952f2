use std::sync::Arc;

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };
use serde::Deserialize;
use serde_json::Value;

use crate::{
  apphandler::AppHandler,
  structs::{ apierror::APIError, outcome::Outcome },
  util::{ cors, lenient::{ lenient, LenientJson }, port, task::guarded }
};

const DEFAULT_HOST: &'static str = "google.com";
const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Default, Deserialize)]
pub struct PortScanRequestBody{
  #[serde(default, deserialize_with = "lenient")]
  host: Option<String>,

  // kept raw so an out-of-range port is reported instead of replaced
  #[serde(default, deserialize_with = "lenient")]
  port: Option<Value>
}

impl PortScanRequestBody{
  fn host( &self ) -> String{
    self.host.clone().unwrap_or_else(|| DEFAULT_HOST.into())
  }

  fn port( &self ) -> Result<u16, String>{
    let parsed = match &self.port{
      None | Some(Value::Null) => return Ok(DEFAULT_PORT),
      Some(Value::Number(number)) => number.as_u64().and_then(| port | u16::try_from(port).ok()),
      Some(Value::String(text)) => text.trim().parse::<u16>().ok(),
      Some(_) => None
    };

    parsed.ok_or_else(|| format!("port must be an integer between 0 and 65535, got {}", self.port.as_ref().map(Value::to_string).unwrap_or_default()))
  }
}

pub async fn post(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>,
  LenientJson(body): LenientJson<PortScanRequestBody>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);

  let result = match body.port(){
    Ok(number) => guarded(&origin, port::check(body.host(), number)).await?,
    Err(err) => {
      log::warn!("Rejecting port check: {}", err);
      Outcome::failed(err)
    }
  };

  Ok((
    StatusCode::OK,
    cors::headers(origin, "POST"),
    Json(result)
  ))
}
