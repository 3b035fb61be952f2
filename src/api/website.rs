use std::sync::Arc;

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };
use serde::Deserialize;

use crate::{
  apphandler::AppHandler,
  structs::apierror::APIError,
  util::{ cors, lenient::{ lenient, LenientJson }, task::guarded, website }
};

const DEFAULT_URL: &'static str = "https://google.com";

#[derive(Debug, Default, Deserialize)]
pub struct WebsiteRequestBody{
  #[serde(default, deserialize_with = "lenient")]
  url: Option<String>
}

impl WebsiteRequestBody{
  fn url( &self ) -> String{
    self.url.clone().unwrap_or_else(|| DEFAULT_URL.into())
  }
}

pub async fn post(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>,
  LenientJson(body): LenientJson<WebsiteRequestBody>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);
  let result = guarded(&origin, website::check(body.url())).await?;

  Ok((
    StatusCode::OK,
    cors::headers(origin, "POST"),
    Json(result)
  ))
}
