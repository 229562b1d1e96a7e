//! Version command.

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the version and exit successfully.
pub fn handle_version_command() -> ! {
    println!("guide-drawer {}", VERSION);
    std::process::exit(0)
}
