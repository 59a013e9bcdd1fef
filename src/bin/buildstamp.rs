//! Build Stamp CLI (buildstamp) - Main binary entry point

use buildstamp::cli::args::parse_args;
use buildstamp::{BuildHook, version_json_plugin};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug buildstamp --out-dir dist
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if let Some(first) = args.get(1) {
        match first.as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-v" => {
                print_version();
                return;
            }
            _ => {}
        }
    }

    let stamp_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let mut hook = version_json_plugin(stamp_args.to_options());
    hook.config_resolved(&stamp_args.host_config());

    match hook.close_bundle() {
        Ok(path) => {
            if !stamp_args.quiet {
                eprintln!("Version file written: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(4);
        }
    }
}

fn print_help() {
    println!("Build Stamp CLI (buildstamp) - Write a version.json describing the build");
    println!();
    println!("USAGE:");
    println!("    buildstamp [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --out-dir <DIR>            Build output directory (default: dist)");
    println!("    --subdir <NAME>            Subdirectory inside the output directory");
    println!("    --file-name <NAME>         Output file name (default: version.json)");
    println!("    --fields <LIST>            Comma-separated: version,revision,builtAt (default: all)");
    println!("    --fallback-revision <REV>  Revision used when git is unavailable (default: unknown)");
    println!("    --manifest <FILE>          Manifest holding the version (default: package.json)");
    println!("    --compact                  Write single-line JSON");
    println!("    --quiet                    Suppress non-error output");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    buildstamp --out-dir dist");
    println!("    buildstamp --out-dir build --subdir meta --fields version,builtAt --compact");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("BUILDSTAMP_GIT_HASH");
    const BUILD_TARGET: &str = env!("BUILDSTAMP_TARGET");

    println!("buildstamp {VERSION}");
    println!("Commit: {GIT_HASH}");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
