use std::future::Future;

use crate::structs::apierror::APIError;

pub async fn guarded<F, T>( origin: &str, check: F ) -> Result<T, APIError>
where
  F: Future<Output = T> + Send + 'static,
  T: Send + 'static
{
  tokio::spawn(check).await
    .map_err(| err | APIError::internal(format!("Handler failed: {}", err), origin.to_owned()))
}
