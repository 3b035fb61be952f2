use serde::Serialize;

// output is absent when the process never started or was killed on timeout
#[derive(Debug, Serialize)]
pub struct CommandResult{
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<String>,
  pub error: String
}

impl CommandResult{
  pub fn failed( error: impl ToString ) -> Self{
    Self {
      success: false,
      output: None,
      error: error.to_string()
    }
  }
}
