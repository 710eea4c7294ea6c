//! Build script that ensures Cargo rebuilds when bundled templates change.
//!
//! The word-cloud renderer embeds its SVG template with `include_str!`, but
//! Cargo cannot automatically detect when files outside `src/` change. This
//! script emits a `rerun-if-changed` directive so incremental builds pick up
//! template edits.

fn main() {
    println!("cargo:rerun-if-changed=templates");
}
