use std::sync::Arc;

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };
use serde::Deserialize;

use crate::{
  apphandler::AppHandler,
  structs::apierror::APIError,
  util::{ command, cors, lenient::{ lenient, LenientJson }, task::guarded }
};

const DEFAULT_HOST: &'static str = "google.com";

#[derive(Debug, Default, Deserialize)]
pub struct TracerouteRequestBody{
  #[serde(default, deserialize_with = "lenient")]
  host: Option<String>
}

impl TracerouteRequestBody{
  fn host( &self ) -> String{
    self.host.clone().unwrap_or_else(|| DEFAULT_HOST.into())
  }
}

pub async fn post(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>,
  LenientJson(body): LenientJson<TracerouteRequestBody>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);
  let result = guarded(&origin, command::traceroute(body.host())).await?;

  Ok((
    StatusCode::OK,
    cors::headers(origin, "POST"),
    Json(result)
  ))
}

#[cfg(test)]
mod tests{
  use crate::util::lenient::parse_or_default;

  use super::*;

  #[test]
  fn empty_body_uses_defaults(){
    let body: TracerouteRequestBody = parse_or_default(b"{}");
    assert_eq!(body.host(), "google.com");
  }
}
