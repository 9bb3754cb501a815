/// Joist build script.
///
/// Resolves the compiled-target facts (CPU architecture and byte order) once,
/// at build time, and exposes them to the crate as plain environment
/// constants.  `ident::compiled_architecture` and `ident::compiled_endianness`
/// read these instead of sprouting a `cfg` ladder per architecture.
fn main() {
    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");

    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let endian = std::env::var("CARGO_CFG_TARGET_ENDIAN").unwrap_or_default();

    println!("cargo:rustc-env=JOIST_TARGET_ARCH={arch}");
    println!("cargo:rustc-env=JOIST_TARGET_ENDIAN={endian}");
}
