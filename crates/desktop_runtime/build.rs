use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
struct DesktopSettings {
    z_index_baseline: u32,
    taskbar_height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    icon: String,
    desktop_label: String,
    section: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    desktop: DesktopSettings,
    windows: Vec<WindowManifest>,
}

fn section_variant(section: &str) -> Option<&'static str> {
    match section {
        "apps" => Some("CatalogSection::Apps"),
        "games" => Some("CatalogSection::Games"),
        _ => None,
    }
}

fn validate(manifest: &CatalogManifest, path: &str) {
    if manifest.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {path}: expected {CATALOG_SCHEMA_VERSION} found {}",
            manifest.schema_version
        );
    }
    if manifest.windows.is_empty() {
        panic!("catalog {path} declares no windows");
    }
    if manifest.desktop.taskbar_height <= 0 {
        panic!("catalog {path}: taskbar_height must be positive");
    }

    let mut seen = HashSet::new();
    for window in &manifest.windows {
        if window.id.trim().is_empty() {
            panic!("catalog {path}: window id must not be empty");
        }
        if !seen.insert(window.id.as_str()) {
            panic!("catalog {path}: duplicate window id `{}`", window.id);
        }
        if section_variant(&window.section).is_none() {
            panic!(
                "catalog {path}: window `{}` has unknown section `{}`",
                window.id, window.section
            );
        }
        if window.width <= 0 || window.height <= 0 {
            panic!(
                "catalog {path}: window `{}` must have a positive size",
                window.id
            );
        }
    }
}

fn render(manifest: &CatalogManifest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/// Build-time generated z-index baseline.");
    let _ = writeln!(
        out,
        "pub const Z_INDEX_BASELINE: u32 = {};",
        manifest.desktop.z_index_baseline
    );
    let _ = writeln!(out, "/// Build-time generated taskbar height in CSS pixels.");
    let _ = writeln!(
        out,
        "pub const TASKBAR_HEIGHT_PX: i32 = {};",
        manifest.desktop.taskbar_height
    );
    let _ = writeln!(out, "/// Build-time generated window catalog, in declaration order.");
    let _ = writeln!(out, "pub const WINDOW_CATALOG: &[CatalogEntry] = &[");
    for window in &manifest.windows {
        let section = section_variant(&window.section).unwrap_or("CatalogSection::Apps");
        let _ = writeln!(
            out,
            "    CatalogEntry {{ id: WindowId({:?}), title: {:?}, icon: {:?}, desktop_label: {:?}, section: {}, default_rect: WindowRect {{ x: {}, y: {}, w: {}, h: {} }} }},",
            window.id,
            window.title,
            window.icon,
            window.desktop_label,
            section,
            window.x,
            window.y,
            window.width,
            window.height
        );
    }
    let _ = writeln!(out, "];");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("windows.catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&manifest, &path.display().to_string());

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, render(&manifest))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
