//! Build script for the pratilipi web binary.
//!
//! The API base URL is baked in at compile time via
//! `option_env!("PRATILIPI_API_URL")` in `main.rs`. Cargo does not
//! track `option_env!` lookups on its own, so this script registers the
//! variable and the stylesheet that `main.rs` embeds.

fn main() {
    println!("cargo:rerun-if-env-changed=PRATILIPI_API_URL");
    println!("cargo:rerun-if-changed=assets/style.css");
}
