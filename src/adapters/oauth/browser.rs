//! Open a URL in the user's browser

use log::debug;

/// Ask the platform to open `url`, returning whether a launcher started
///
/// Failure is not an error: the caller prints the URL anyway.
pub fn open(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd").args(["/c", "start", "", url]).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    match result {
        Ok(_) => true,
        Err(e) => {
            debug!("Could not launch browser: {e}");
            false
        },
    }
}
