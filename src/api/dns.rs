use std::sync::Arc;

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };
use serde::Deserialize;

use crate::{
  apphandler::AppHandler,
  structs::apierror::APIError,
  util::{ cors, dns, lenient::{ lenient, LenientJson }, task::guarded }
};

const DEFAULT_DOMAIN: &'static str = "google.com";

#[derive(Debug, Default, Deserialize)]
pub struct DnsRequestBody{
  #[serde(default, deserialize_with = "lenient")]
  domain: Option<String>
}

impl DnsRequestBody{
  fn domain( &self ) -> String{
    self.domain.clone().unwrap_or_else(|| DEFAULT_DOMAIN.into())
  }
}

pub async fn post(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>,
  LenientJson(body): LenientJson<DnsRequestBody>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);
  let result = guarded(&origin, dns::lookup(body.domain())).await?;

  Ok((
    StatusCode::OK,
    cors::headers(origin, "POST"),
    Json(result)
  ))
}
