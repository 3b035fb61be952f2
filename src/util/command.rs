use std::time::Duration;

use anyhow::{ anyhow, Context };
use tokio::process::Command;

use crate::structs::command::CommandResult;

pub const PING_TIMEOUT: Duration = Duration::from_secs(30);
pub const TRACEROUTE_TIMEOUT: Duration = Duration::from_secs(60);

pub async fn ping( host: String, count: String ) -> CommandResult{
  run(&ping_command(&host, &count), PING_TIMEOUT).await
}

pub async fn traceroute( host: String ) -> CommandResult{
  run(&traceroute_command(&host), TRACEROUTE_TIMEOUT).await
}

pub fn ping_command( host: &str, count: &str ) -> Vec<String>{
  let flag = if cfg!(windows) { "-n" } else { "-c" };
  vec![ "ping".into(), flag.into(), count.into(), host.into() ]
}

pub fn traceroute_command( host: &str ) -> Vec<String>{
  if cfg!(windows){
    vec![ "tracert".into(), "-d".into(), host.into() ]
  } else{
    vec![ "traceroute".into(), "-n".into(), host.into() ]
  }
}

pub async fn run( argv: &[String], timeout: Duration ) -> CommandResult{
  log::debug!("Running {:?}", argv);

  match capture(argv, timeout).await{
    Ok(result) => result,
    Err(err) => {
      log::warn!("{} failed: {:#}", argv.join(" "), err);
      CommandResult::failed(format!("{:#}", err))
    }
  }
}

async fn capture( argv: &[String], timeout: Duration ) -> anyhow::Result<CommandResult>{
  let ( program, args ) = argv.split_first().context("empty command line")?;

  // kill_on_drop reaps the child when the timeout drops the future
  let child = Command::new(program).args(args).kill_on_drop(true).output();

  let output = tokio::time::timeout(timeout, child).await
    .map_err(| _ | anyhow!("Command '{}' timed out after {} seconds", argv.join(" "), timeout.as_secs_f64()))?
    .with_context(|| format!("could not run {}", program))?;

  Ok(CommandResult {
    success: output.status.success(),
    output: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
    error: String::from_utf8_lossy(&output.stderr).into_owned()
  })
}

#[cfg(test)]
mod tests{
  use super::*;

  #[test]
  fn builds_platform_command_lines(){
    let ping = ping_command("8.8.8.8", "4");
    let trace = traceroute_command("google.com");

    if cfg!(windows){
      assert_eq!(ping, vec![ "ping", "-n", "4", "8.8.8.8" ]);
      assert_eq!(trace, vec![ "tracert", "-d", "google.com" ]);
    } else{
      assert_eq!(ping, vec![ "ping", "-c", "4", "8.8.8.8" ]);
      assert_eq!(trace, vec![ "traceroute", "-n", "google.com" ]);
    }
  }

  #[tokio::test]
  async fn spawn_failure_is_embedded(){
    let result = run(&[ "netdiag-no-such-binary".to_owned() ], Duration::from_secs(1)).await;

    assert!(!result.success);
    assert!(result.output.is_none());
    assert!(result.error.contains("netdiag-no-such-binary"), "{}", result.error);
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn captures_streams_and_exit_status(){
    let argv: Vec<String> = [ "sh", "-c", "echo out; echo err >&2; exit 1" ].iter().map(| s | s.to_string()).collect();
    let result = run(&argv, Duration::from_secs(5)).await;

    assert!(!result.success);
    assert_eq!(result.output.as_deref(), Some("out\n"));
    assert_eq!(result.error, "err\n");
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn slow_commands_time_out(){
    let argv: Vec<String> = [ "sleep", "5" ].iter().map(| s | s.to_string()).collect();
    let result = run(&argv, Duration::from_millis(200)).await;

    assert!(!result.success);
    assert!(result.error.contains("timed out after 0.2 seconds"), "{}", result.error);
  }
}
