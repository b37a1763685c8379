use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/ringdial.sock";

/// Control socket: one newline-delimited command per line.
///
///   set <value>   programmatic value set, clamped like any other
///   quit          close the application
pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_command(line.trim()) {
                            Some(event) => {
                                let _ = tx.send(event).await;
                            }
                            None => log::debug!("ignoring socket command: {:?}", line.trim()),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

fn parse_command(line: &str) -> Option<AppEvent> {
    if line == "quit" {
        return Some(AppEvent::Quit);
    }
    let value = line.strip_prefix("set ")?.trim().parse::<f64>().ok()?;
    Some(AppEvent::SetValue(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("quit"), Some(AppEvent::Quit)));
        assert!(
            matches!(parse_command("set 42.5"), Some(AppEvent::SetValue(v)) if (v - 42.5).abs() < 1e-9)
        );
        assert!(matches!(parse_command("set  -3"), Some(AppEvent::SetValue(v)) if v == -3.0));
        assert!(parse_command("set").is_none());
        assert!(parse_command("set abc").is_none());
        assert!(parse_command("show").is_none());
        assert!(parse_command("").is_none());
    }
}
