//! Build script for fleeting.
//!
//! Snapshots `data/ignition/**` into `$OUT_DIR/embedded.rs` so the binary
//! carries its provisioning bundle without touching the disk at runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

fn main() {
    println!("cargo:rerun-if-changed=data");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let data_dir = manifest_dir.join("data");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let mut generated = String::from("static EMBEDDED_FILES: &[(&str, &[u8])] = &[\n");

    if data_dir.join("ignition").is_dir() {
        for entry in WalkDir::new(data_dir.join("ignition")).sort_by_file_name() {
            let entry = entry.expect("failed to walk data/ignition");
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&data_dir)
                .expect("walked path outside data dir");
            let key = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            let abs = entry.path().to_string_lossy().into_owned();
            writeln!(generated, "    ({:?}, include_bytes!({:?})),", key, abs)
                .expect("write to String");
        }
    }

    generated.push_str("];\n");
    fs::write(out_dir.join("embedded.rs"), generated).expect("failed to write embedded.rs");
}
