use std::env;
use std::path::PathBuf;

#[cfg(feature = "kernel")]
fn build_and_link_kernel() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let kernel_c_path = manifest_dir
        .join("src")
        .join("optimized")
        .join("maxheap_kernel.c");

    // Tell Cargo that if the given file changes, to rerun this build script.
    println!("cargo:rerun-if-changed={}", kernel_c_path.display());

    println!("cargo:rerun-if-env-changed=MAXHEAP_NO_KERNEL");

    if env::var_os("MAXHEAP_NO_KERNEL").is_some() {
        return;
    }

    // A missing or broken C toolchain is not fatal, the crate then only has the portable backend.
    let build_result = cc::Build::new()
        .file(&kernel_c_path)
        .opt_level(2)
        .flag_if_supported("-std=c99")
        .warnings(true)
        .try_compile("maxheap_kernel");

    match build_result {
        Ok(()) => println!("cargo:rustc-cfg=maxheap_kernel"),
        Err(err) => println!(
            "cargo:warning=maxheap: native kernel not built, only the portable backend is available: {err:?}"
        ),
    }
}

#[cfg(not(feature = "kernel"))]
fn build_and_link_kernel() {}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let build_rs_path = manifest_dir.join("build.rs").canonicalize().unwrap();

    // By default without this line, cargo re-runs the build script for all source changes.
    println!("cargo:rerun-if-changed={}", build_rs_path.display());

    println!("cargo:rustc-check-cfg=cfg(maxheap_kernel)");

    build_and_link_kernel();
}
