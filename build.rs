use std::process::Command;

fn main() {
    // Stamp the binary with the build timestamp, shown in --version output
    let build_date = Command::new("date")
        .arg("+%Y-%m-%d %H:%M:%S %Z")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    // Re-run if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

// Made with Bob
