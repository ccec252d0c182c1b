fn main() {
    // Footer shows when the site was last rebuilt
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");

    // Posts are embedded at compile time, so new content means a new stamp
    println!("cargo:rerun-if-changed=blog");
    println!("cargo:rerun-if-changed=build.rs");
}
