use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    app_id: String,
    display_name: String,
    window_title: String,
    menu_order: u32,
    show_in_taskbar: bool,
    show_in_context_menu: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_defaults: Option<WindowDefaults>,
}

#[derive(Debug, Clone, Deserialize)]
struct AppManifest {
    schema_version: u32,
    #[serde(rename = "app")]
    apps: Vec<AppEntry>,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    ["notepad", "terminal", "files", "settings", "installer", "web_view"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut entries = Vec::<AppEntry>::new();
    let mut seen = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if manifest.schema_version != 1 {
            panic!(
                "manifest schema mismatch in {}: expected 1 found {}",
                path.display(),
                manifest.schema_version
            );
        }
        for entry in manifest.apps {
            if !seen.insert(entry.app_id.clone()) {
                panic!("duplicate app id `{}` in {}", entry.app_id, path.display());
            }
            if let Some(defaults) = &entry.window_defaults {
                if defaults.width <= 0 || defaults.height <= 0 {
                    panic!(
                        "non-positive window_defaults for `{}` in {}",
                        entry.app_id,
                        path.display()
                    );
                }
            }
            entries.push(entry);
        }
    }

    entries.sort_by_key(|entry| entry.menu_order);
    let json = serde_json::to_string_pretty(&entries).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
