//  ____  ____     __        __       ____
// |  _ \|  _ \ __ \ \      / /__    / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::{Context, Result};
use arboard::Clipboard;
use log::{debug, info, warn};
use std::io::{self, Read, Write};
use std::{env, path::Path, process, thread, time::Duration};

const DAEMON_ENV: &str = "RPAWOGEN_CLIPBOARD_DAEMON";
const TIMEOUT_ENV: &str = "RPAWOGEN_CLIPBOARD_TIMEOUT";

/// True when this process was started to clear the clipboard later.
pub fn is_daemon() -> bool {
    env::var_os(DAEMON_ENV).is_some()
}

/// The clipboard is only cleared if nobody replaced our password meanwhile.
pub fn should_clear(current: &str, secret: &str) -> bool {
    !secret.is_empty() && current == secret
}

/// Command that restarts `exe_path` as the clipboard daemon. Only the
/// timeout is passed in the environment; the secret goes through stdin.
pub fn daemon_command(exe_path: &Path, timeout: u64) -> process::Command {
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
       .env(TIMEOUT_ENV, timeout.to_string())
       .stdin(process::Stdio::piped())
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }
    cmd
}

fn spawn_daemon(secret: &str, timeout: u64) -> Result<()> {
    let exe_path = env::current_exe().context("Cannot locate current executable")?;
    let mut cmd = daemon_command(&exe_path, timeout);
    let mut child = cmd.spawn().context("Failed to start clipboard daemon")?;
    // 密码经管道传给守护进程，不放进环境变量
    let mut stdin = child.stdin.take().context("Clipboard daemon has no stdin")?;
    stdin
        .write_all(secret.as_bytes())
        .context("Failed to hand the password to the clipboard daemon")?;
    Ok(())
}

/// 守护进程：等待超时后清空剪贴板
pub fn run_daemon() -> Result<()> {
    let mut secret = String::new();
    io::stdin()
        .read_to_string(&mut secret)
        .context("Failed to read the password from the parent process")?;
    let timeout: u64 = env::var(TIMEOUT_ENV)
        .context("Clipboard daemon started without a timeout")?
        .parse()
        .context("Invalid clipboard timeout")?;

    thread::sleep(Duration::from_secs(timeout));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("Clipboard unavailable in daemon: {}", e);
            return Ok(());
        }
    };
    let current = ctx.get_text().unwrap_or_default();
    if should_clear(&current, &secret) {
        ctx.clear().context("Failed to clear clipboard")?;
        debug!("Clipboard cleared after {}s", timeout);
    } else {
        debug!("Clipboard changed, leaving it alone");
    }
    Ok(())
}

/// Copies `secret` to the clipboard. With a non-zero `timeout` a detached
/// daemon clears it again after that many seconds.
pub fn copy_to_clipboard(secret: &str, timeout: u64) -> Result<()> {
    let mut ctx = Clipboard::new().context("Failed to open clipboard")?;
    ctx.set_text(secret).context("Failed to copy to clipboard")?;
    info!("Password copied to clipboard");
    if timeout > 0 {
        spawn_daemon(secret, timeout)?;
    }
    Ok(())
}
