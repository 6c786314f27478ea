//! Build script to compile the C reference sorts.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let compiler = cc::Build::new().get_compiler();

    let compiler_name = if compiler.is_like_clang() {
        // Vanilla Clang shares Rust's LLVM backend, so only Apple Clang is accepted.
        if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "macos" {
            "Apple Clang"
        } else {
            println!("cargo:warning=Vanilla Clang detected. C reference sorts disabled (requires GCC, MSVC, or Apple Clang).");
            return;
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Apple Clang, or MSVC). C reference sorts disabled.");
        return;
    };

    let mut build = cc::Build::new();

    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            println!("cargo:warning=Invalid glob pattern for C sources: {}", e);
            return;
        }
    };

    if c_files.is_empty() {
        return;
    }

    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    build.opt_level(2).flag_if_supported("-std=c11");
    build.compile("linear_algo_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
