use std::sync::Arc;

use axum::{ http::{ HeaderMap, StatusCode }, response::IntoResponse, Extension, Json };
use serde::Deserialize;
use serde_json::Value;

use crate::{
  apphandler::AppHandler,
  structs::apierror::APIError,
  util::{ command, cors, lenient::{ lenient, LenientJson }, task::guarded }
};

const DEFAULT_HOST: &'static str = "8.8.8.8";
const DEFAULT_COUNT: &'static str = "4";

#[derive(Debug, Default, Deserialize)]
pub struct PingRequestBody{
  #[serde(default, deserialize_with = "lenient")]
  host: Option<String>,

  // the page posts the raw input value, so numbers and strings are both accepted
  #[serde(default, deserialize_with = "lenient")]
  count: Option<Value>
}

impl PingRequestBody{
  fn host( &self ) -> String{
    self.host.clone().unwrap_or_else(|| DEFAULT_HOST.into())
  }

  fn count( &self ) -> String{
    match &self.count{
      None | Some(Value::Null) => DEFAULT_COUNT.into(),
      Some(Value::String(count)) => count.clone(),
      Some(other) => other.to_string()
    }
  }
}

pub async fn post(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>,
  LenientJson(body): LenientJson<PingRequestBody>
) -> Result<impl IntoResponse, APIError>{
  let origin = cors::cors(&headers, &app.config);
  let result = guarded(&origin, command::ping(body.host(), body.count())).await?;

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
    let body: PingRequestBody = parse_or_default(b"{}");

    assert_eq!(body.host(), "8.8.8.8");
    assert_eq!(body.count(), "4");
  }

  #[test]
  fn count_accepts_numbers_and_strings(){
    let body: PingRequestBody = parse_or_default(br#"{"host": "1.1.1.1", "count": 2}"#);
    assert_eq!(( body.host().as_str(), body.count().as_str() ), ( "1.1.1.1", "2" ));

    let body: PingRequestBody = parse_or_default(br#"{"count": "7"}"#);
    assert_eq!(body.count(), "7");

    let body: PingRequestBody = parse_or_default(br#"{"count": null}"#);
    assert_eq!(body.count(), "4");
  }
}
