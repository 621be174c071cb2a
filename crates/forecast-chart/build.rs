// File: crates/forecast-chart/build.rs
// Summary: Links the Windows system libraries the prebuilt Skia binaries expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
