use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value;

pub const NOT_AVAILABLE: &'static str = "N/A";

// Every field falls back to "N/A" when the upstream omits it or sends null.
// Non-string values (a numeric postal code, say) are kept as their JSON text.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IPInfo{
  #[serde(deserialize_with = "or_not_available")]
  pub ip: String,
  #[serde(deserialize_with = "or_not_available")]
  pub hostname: String,
  #[serde(deserialize_with = "or_not_available")]
  pub org: String,
  #[serde(deserialize_with = "or_not_available")]
  pub city: String,
  #[serde(deserialize_with = "or_not_available")]
  pub country: String,
  #[serde(deserialize_with = "or_not_available")]
  pub region: String,
  #[serde(deserialize_with = "or_not_available")]
  pub timezone: String,
  #[serde(deserialize_with = "or_not_available")]
  pub postal: String,
  #[serde(deserialize_with = "or_not_available")]
  pub loc: String
}

impl Default for IPInfo{
  fn default() -> Self{
    Self {
      ip: NOT_AVAILABLE.into(),
      hostname: NOT_AVAILABLE.into(),
      org: NOT_AVAILABLE.into(),
      city: NOT_AVAILABLE.into(),
      country: NOT_AVAILABLE.into(),
      region: NOT_AVAILABLE.into(),
      timezone: NOT_AVAILABLE.into(),
      postal: NOT_AVAILABLE.into(),
      loc: NOT_AVAILABLE.into()
    }
  }
}

fn or_not_available<'de, D>( de: D ) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{
  Ok(match Option::<Value>::deserialize(de)?{
    None | Some(Value::Null) => NOT_AVAILABLE.into(),
    Some(Value::String(text)) => text,
    Some(other) => other.to_string()
  })
}
