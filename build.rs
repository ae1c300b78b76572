//! Forwards the API base URL into the build so `option_env!` can see it.
//!
//! Values in a local `.env` are picked up the same way the server reads its
//! environment in development; an explicitly exported variable wins.

const API_BASE_VAR: &str = "WANDERGUIDE_API_BASE";

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed={API_BASE_VAR}");

    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    if let Ok(base) = std::env::var(API_BASE_VAR) {
        println!("cargo:rustc-env={API_BASE_VAR}={base}");
    }
}
