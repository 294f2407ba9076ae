//! Sharing boundary.
//!
//! A terminal has no platform share sheet, so sharing falls back to an
//! export file: the share text is appended to `shared.txt` in the data
//! directory. Failures are logged and swallowed; the caller only gets a
//! notification string to display.

use crate::app::state::VideoResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// The shareable text for a generated video.
pub fn share_text(video: &VideoResult) -> String {
    format!(
        "Teman Tuli - Video bahasa isyarat untuk: \"{}\" - {}",
        video.source_text, video.url
    )
}

/// Append the share text to the export file. Returns the notification to
/// show the user; never fails the session.
pub fn share_video(data_dir: &Path, video: &VideoResult) -> String {
    let text = share_text(video);
    let path = data_dir.join("shared.txt");
    let result = std::fs::create_dir_all(data_dir).and_then(|_| {
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", text)
    });
    match result {
        Ok(()) => format!("Teks berbagi disimpan ke {}", path.display()),
        Err(e) => {
            warn!("share export failed: {}", e);
            "Tidak dapat membagikan video saat ini.".to_string()
        }
    }
}
