use tracing::debug;

/// Best-effort guess of the desktop's colour preference.
///
/// Only used to seed the `dark-mode` setting on first launch; once a
/// settings file exists the stored value wins.
pub fn detect_system_dark_mode() -> bool {
    let dark = query_platform().unwrap_or(false);
    debug!(dark, "detected system colour preference");
    dark
}

#[cfg(target_os = "windows")]
fn query_platform() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let value = personalize.get_value::<u32, _>("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn query_platform() -> Option<bool> {
    // GNOME 42+ exposes an explicit preference; older desktops only encode
    // it in the GTK theme name.
    if let Some(scheme) = gsettings("color-scheme") {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
        if scheme.contains("prefer-light") {
            return Some(false);
        }
    }
    gsettings("gtk-theme").map(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "macos")]
fn query_platform() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent (non-zero exit) in light mode.
    Some(output.status.success() && String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn query_platform() -> Option<bool> {
    None
}
