//! Xcode asset-catalog `Contents.json` patching.
//!
//! The manifest is externally owned: entries are matched on their
//! `size`/`scale` identifiers and only the `filename` field is assigned;
//! everything else, including entries with no matching output, is left
//! untouched.

use std::path::Path;

use anyhow::Context as _;

/// Filename for a catalog entry, or `None` when the entry is not ours.
fn filename_for(size: &str, scale: &str, base_filename: &str) -> Option<String> {
    let name = match (size, scale) {
        ("1024x1024", _) => base_filename,
        ("16x16", "1x") => "icon-16.png",
        ("16x16", "2x") => "icon-32.png",
        ("32x32", "1x") => "icon-32.png",
        ("32x32", "2x") => "icon-64.png",
        ("128x128", "1x") => "icon-128.png",
        ("128x128", "2x") => "icon-256.png",
        ("256x256", "1x") => "icon-256.png",
        ("256x256", "2x") => "icon-512.png",
        ("512x512", "1x") => "icon-512.png",
        ("512x512", "2x") => base_filename,
        _ => return None,
    };
    Some(name.to_string())
}

/// Rewrite `Contents.json` so every known size/scale entry points at the
/// generated icon files.
pub fn assign_icon_filenames(path: &Path, base_filename: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read manifest '{}'", path.display()))?;
    let mut doc: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse manifest '{}'", path.display()))?;

    if let Some(images) = doc.get_mut("images").and_then(|v| v.as_array_mut()) {
        for image in images {
            let size = image.get("size").and_then(|v| v.as_str()).unwrap_or("");
            let scale = image.get("scale").and_then(|v| v.as_str()).unwrap_or("1x");
            if let Some(filename) = filename_for(size, scale, base_filename) {
                image["filename"] = serde_json::Value::String(filename);
            }
        }
    }

    let out = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, out).with_context(|| format!("write manifest '{}'", path.display()))
}
