use std::io::Write;
use std::time::Duration;

/// Prints `text` one character at a time.
pub async fn typewriter(text: &str, delay_ms: u64) -> std::io::Result<()> {
    let delay = Duration::from_millis(delay_ms);
    let mut stdout = std::io::stdout();
    for c in text.chars() {
        write!(stdout, "{c}")?;
        stdout.flush()?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
