use std::sync::Arc;

use axum::{ http::{ header, HeaderMap, HeaderName, StatusCode }, response::IntoResponse, Extension };

use crate::apphandler::{ AppHandler, Config };

pub async fn options(
  headers: HeaderMap,
  Extension(app): Extension<Arc<AppHandler>>
) -> impl IntoResponse{
  let origin = headers.get(header::ORIGIN).and_then(| origin | origin.to_str().ok());
  let method = headers.get(header::ACCESS_CONTROL_REQUEST_METHOD)
    .and_then(| method | method.to_str().ok())
    .unwrap_or("GET");

  match origin{
    Some(origin) if is_allowed(origin, &app.config) => (
      StatusCode::OK,
      [
        ( header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_owned() ),
        ( header::ACCESS_CONTROL_ALLOW_METHODS, method.to_owned() ),
        ( header::ACCESS_CONTROL_ALLOW_HEADERS, "content-type".into() ),
        ( header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".into() )
      ],
      "200 OK"
    ),
    _ => (
      StatusCode::FORBIDDEN,
      [
        ( header::ACCESS_CONTROL_ALLOW_ORIGIN, "".into() ),
        ( header::ACCESS_CONTROL_ALLOW_METHODS, "".into() ),
        ( header::ACCESS_CONTROL_ALLOW_HEADERS, "".into() ),
        ( header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "false".into() )
      ],
      "403 Forbidden"
    )
  }
}

pub fn cors( headers: &HeaderMap, config: &Config ) -> String{
  headers.get(header::ORIGIN)
    .and_then(| origin | origin.to_str().ok())
    .filter(| origin | is_allowed(origin, config))
    .map(str::to_owned)
    .unwrap_or_default()
}

pub fn headers( origin: String, methods: &'static str ) -> [ ( HeaderName, String ); 3 ]{
  [
    ( header::ACCESS_CONTROL_ALLOW_ORIGIN, origin ),
    ( header::ACCESS_CONTROL_ALLOW_METHODS, methods.into() ),
    ( header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".into() )
  ]
}

fn is_allowed( origin: &str, config: &Config ) -> bool{
  config.allowed_origins.iter().any(| allowed | allowed == origin)
}
