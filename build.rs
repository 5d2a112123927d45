use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Build year for the footer copyright line
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
