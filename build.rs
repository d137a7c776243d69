use chrono::Datelike;

fn main() {
    // Capture the build year for the footer
    let now = chrono::Utc::now();

    // Exposed through env!
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
