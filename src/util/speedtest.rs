use anyhow::{ bail, Context };
use tokio::process::Command;

use crate::{ structs::speedtest::{ SpeedTestResponse, SpeedTestResult }, util::time::round2 };

const BITS_PER_MEGABIT: f64 = 1_000_000.0;

// no timeout, a full run takes as long as the client needs
pub async fn perform( command: Vec<String> ) -> anyhow::Result<SpeedTestResult>{
  run(&command).await.context("Speed test failed")
}

async fn run( command: &[String] ) -> anyhow::Result<SpeedTestResult>{
  let ( program, args ) = command.split_first().context("no speed test client configured")?;
  log::info!("Running speed test with {}", command.join(" "));

  let output = Command::new(program)
    .args(args)
    .kill_on_drop(true)
    .output()
    .await
    .with_context(|| format!("could not start {}", program))?;

  if !output.status.success(){
    bail!("{} exited with {}: {}", program, output.status, String::from_utf8_lossy(&output.stderr).trim());
  }

  let report: SpeedTestResponse = serde_json::from_slice(&output.stdout)
    .with_context(|| format!("unreadable report from {}", program))?;

  Ok(reshape(report))
}

pub fn reshape( report: SpeedTestResponse ) -> SpeedTestResult{
  SpeedTestResult {
    ping: round2(report.ping),
    download_speed: round2(report.download / BITS_PER_MEGABIT),
    upload_speed: round2(report.upload / BITS_PER_MEGABIT),
    server: report.server.name,
    server_country: report.server.country,
    server_sponsor: report.server.sponsor,
    server_distance: round2(report.server.d)
  }
}

#[cfg(test)]
mod tests{
  use super::*;

  const REPORT: &str = r#"{
    "download": 93456789.123,
    "upload": 11987654.5,
    "ping": 14.237,
    "server": { "name": "Porto", "country": "Portugal", "sponsor": "NOS", "d": 271.3391, "id": "1249" },
    "timestamp": "2026-10-17T09:15:02.123456Z",
    "bytes_sent": 15990784,
    "bytes_received": 117452096,
    "share": null
  }"#;

  #[test]
  fn converts_bits_to_megabits_and_rounds(){
    let result = reshape(serde_json::from_str(REPORT).unwrap());

    assert_eq!(result, SpeedTestResult {
      ping: 14.24,
      download_speed: 93.46,
      upload_speed: 11.99,
      server: "Porto".into(),
      server_country: "Portugal".into(),
      server_sponsor: "NOS".into(),
      server_distance: 271.34
    });
  }

  #[tokio::test]
  async fn missing_client_is_a_propagated_failure(){
    let err = perform(vec![ "netdiag-no-such-speedtest-client".into(), "--json".into() ]).await.unwrap_err();
    assert!(format!("{:#}", err).starts_with("Speed test failed: could not start"), "{:#}", err);
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn reads_report_from_stdout(){
    let script = format!("printf '%s' '{}'", REPORT.replace('\n', " "));
    let result = perform(vec![ "sh".into(), "-c".into(), script ]).await.unwrap();

    assert_eq!(result.server, "Porto");
    assert_eq!(result.download_speed, 93.46);
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn non_zero_exit_is_a_failure(){
    let err = perform(vec![ "sh".into(), "-c".into(), "echo 'no servers' >&2; exit 3".into() ]).await.unwrap_err();
    let msg = format!("{:#}", err);

    assert!(msg.starts_with("Speed test failed: "), "{}", msg);
    assert!(msg.contains("no servers"), "{}", msg);
  }
}
