use axum::{ http::{ header, StatusCode }, response::{ IntoResponse, Response }, Json };
use serde_json::json;

#[derive(Debug)]
pub struct APIError{
  code: StatusCode,
  msg: String,
  origin: String
}

impl APIError{
  pub fn new( code: StatusCode, msg: String, origin: String ) -> Self{
    Self { code, msg, origin }
  }

  pub fn internal( msg: String, origin: String ) -> Self{
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg, origin)
  }
}

#[cfg(test)]
impl APIError{
  pub fn code( &self ) -> StatusCode { self.code }
  pub fn msg( &self ) -> &str { &self.msg }
}

impl IntoResponse for APIError{
  fn into_response( self ) -> Response{
    log::error!("Answering {}: {}", self.code, self.msg);

    (
      self.code,
      [
        ( header::ACCESS_CONTROL_ALLOW_ORIGIN, self.origin ),
        ( header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,OPTIONS".into() ),
        ( header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_owned() )
      ],
      Json(json!({ "error": self.msg }))
    ).into_response()
  }
}
