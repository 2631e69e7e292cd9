//! Scope guards and display adapters.
//!
//! A temporary file is removed when the scope ends, whether the work
//! finishes or bails out early, and optional values print as `none()`.

use std::fs;
use std::io;
use std::path::Path;

use kindred::aliases::{Opt, Str};
use kindred::fmt::{OptionDisplayExt, PathDisplayExt, SliceDisplayExt};
use kindred::{defer, finally};

fn process(path: &Path, fail: bool) -> io::Result<usize> {
    fs::write(path, b"alpha\nbeta\ngamma\n")?;
    let cleanup = finally(|| {
        let _ = fs::remove_file(path);
        println!("  removed {}", path.display_native());
    });

    if fail {
        return Err(io::Error::other("simulated failure"));
    }

    let lines = fs::read_to_string(path)?.lines().count();
    drop(cleanup);
    Ok(lines)
}

fn main() -> io::Result<()> {
    println!("--- Scope Guard ---\n");

    let dir = std::env::temp_dir();
    let ok_path = dir.join("kindred-demo-ok.txt");
    let bad_path = dir.join("kindred-demo-bad.txt");

    println!("{}: {:?}", ok_path.display_native(), process(&ok_path, false)?);
    let failed = process(&bad_path, true);
    println!("{}: {:?}", bad_path.display_native(), failed.map_err(|e| e.to_string()));
    assert!(!ok_path.exists());
    assert!(!bad_path.exists());

    {
        defer! { println!("  deferred: leaving block"); }
        println!("  inside block");
    }

    println!("\n--- Display Adapters ---\n");

    let owner: Opt<Str> = None;
    let port: Opt<u16> = Some(8080);
    println!("owner = [{:>8}]", owner.display_opt());
    println!("port  = [{:>8}]", port.display_opt());
    println!("tags  = {}", ["fast", "safe"].display_seq());

    Ok(())
}
