// Linux-specific helpers: DMI product name, DRM display modes, wireless detection.

/// Read the product name from DMI (Linux), e.g. the TV or board model.
pub(super) fn read_product_name_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let v = std::fs::read_to_string("/sys/class/dmi/id/product_name").ok()?;
        let v = v.trim();
        if v.is_empty() || v.eq_ignore_ascii_case("to be filled by o.e.m.") {
            return None;
        }
        Some(v.to_string())
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Preferred mode (first line of `modes`) of the first connected DRM connector.
/// Connectors are visited in name order so the result is stable.
pub(super) fn read_display_resolution_linux() -> Option<(u32, u32)> {
    #[cfg(target_os = "linux")]
    {
        let mut connectors: Vec<std::path::PathBuf> = std::fs::read_dir("/sys/class/drm")
            .ok()?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.join("status").exists())
            .collect();
        connectors.sort();
        for connector in connectors {
            let status = std::fs::read_to_string(connector.join("status")).unwrap_or_default();
            if status.trim() != "connected" {
                continue;
            }
            let modes = std::fs::read_to_string(connector.join("modes")).unwrap_or_default();
            if let Some(resolution) = modes.lines().next().and_then(parse_mode) {
                return Some(resolution);
            }
        }
    }
    None
}

/// Parse a DRM mode line such as `1920x1080` or `1920x1080i`.
pub(super) fn parse_mode(line: &str) -> Option<(u32, u32)> {
    let (w, h) = line.trim().split_once('x')?;
    let h: String = h.chars().take_while(|c| c.is_ascii_digit()).collect();
    let w = w.parse::<u32>().ok()?;
    let h = h.parse::<u32>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

/// True when the interface is a wireless device. Falls back to the `wl*`
/// naming convention off Linux.
pub(super) fn is_wireless(interface_name: &str) -> bool {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/wireless", interface_name);
        if std::path::Path::new(&path).exists() {
            return true;
        }
    }
    interface_name.starts_with("wl")
}
