use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome<T>{
  Done(T),
  Failed{ error: String }
}

impl<T> Outcome<T>{
  pub fn failed( error: impl ToString ) -> Self{
    Outcome::Failed { error: error.to_string() }
  }

  #[cfg(test)]
  pub fn is_failed( &self ) -> bool{
    matches!(self, Outcome::Failed { .. })
  }
}

impl<T> From<anyhow::Result<T>> for Outcome<T>{
  fn from( result: anyhow::Result<T> ) -> Self{
    match result{
      Ok(value) => Outcome::Done(value),
      Err(err) => Outcome::failed(format!("{:#}", err))
    }
  }
}
