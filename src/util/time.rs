use chrono::Local;

pub fn round2( value: f64 ) -> f64{
  (value * 100.0).round() / 100.0
}

pub fn timestamp() -> String{
  Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
