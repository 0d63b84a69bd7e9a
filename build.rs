fn main() {
    // The footer shows the copyright year and build date from this stamp
    let stamp = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={stamp}");

    // Restamp only when this script changes, not on every source edit
    println!("cargo:rerun-if-changed=build.rs");
}
