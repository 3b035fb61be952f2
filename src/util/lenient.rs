use std::convert::Infallible;

use axum::{ body::Bytes, extract::{ FromRequest, Request } };
use serde::{ de::DeserializeOwned, Deserialize, Deserializer };

pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Default + Send
{
  type Rejection = Infallible;

  async fn from_request( req: Request, state: &S ) -> Result<Self, Self::Rejection>{
    match Bytes::from_request(req, state).await{
      Ok(body) => Ok(Self(parse_or_default(&body))),
      Err(err) => {
        log::debug!("Could not read request body, using defaults: {}", err);
        Ok(Self(T::default()))
      }
    }
  }
}

pub fn parse_or_default<T>( body: &[u8] ) -> T
where
  T: DeserializeOwned + Default
{
  serde_json::from_slice(body).unwrap_or_else(| err | {
    if !body.is_empty(){ log::debug!("Ignoring unparsable request body: {}", err) }
    T::default()
  })
}

pub fn lenient<'de, D, T>( de: D ) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned
{
  let value = serde_json::Value::deserialize(de)?;
  Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests{
  use axum::body::Body;

  use super::*;

  #[derive(Debug, Default, Deserialize, PartialEq)]
  struct Sample{
    #[serde(default, deserialize_with = "lenient")]
    host: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    port: Option<u16>
  }

  #[test]
  fn garbage_bodies_fall_back_to_defaults(){
    for body in [ "", "not json", "null", "true", "42", "\"host\"" ]{
      assert_eq!(parse_or_default::<Sample>(body.as_bytes()), Sample::default(), "body {:?}", body);
    }
  }

  #[test]
  fn mistyped_fields_fall_back_individually(){
    let sample: Sample = parse_or_default(br#"{"host": "example.org", "port": "eighty"}"#);
    assert_eq!(sample, Sample { host: Some("example.org".into()), port: None });

    let sample: Sample = parse_or_default(br#"{"host": 7, "port": 70000}"#);
    assert_eq!(sample, Sample::default());

    let sample: Sample = parse_or_default(br#"{"port": 443, "extra": true}"#);
    assert_eq!(sample, Sample { host: None, port: Some(443) });
  }

  #[tokio::test]
  async fn extractor_never_rejects(){
    let req = axum::http::Request::builder()
      .method("POST")
      .uri("/api/dns")
      .body(Body::from("{ broken"))
      .unwrap();

    let LenientJson(sample) = LenientJson::<Sample>::from_request(req, &()).await.unwrap();
    assert_eq!(sample, Sample::default());
  }
}
