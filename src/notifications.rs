//! Completion notification: terminal bell plus a desktop banner where
//! supported. Currently only macOS banners are implemented.

use std::io::{self, Write};

#[cfg(target_os = "macos")]
use std::process::Command;

/// Announce that the countdown reached zero
pub fn notify_time_up() {
    ring_bell();

    #[cfg(target_os = "macos")]
    {
        let script = r#"display notification "Time's up!" with title "Tempo""#;

        let _ = Command::new("osascript").arg("-e").arg(script).output();
    }
}

/// ASCII BEL, audible even inside the alternate screen
fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
