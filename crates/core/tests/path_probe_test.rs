//! Resolution against real executables on a private search path

#![cfg(unix)]

use script_runner_core::{Error, PathProbe, RuntimeFamily, RuntimeResolver};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn install(bin_dir: &Path, name: &str) {
    let path = bin_dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_resolves_installed_runtimes() {
    let temp_dir = TempDir::new().unwrap();
    install(temp_dir.path(), "deno");

    let resolver = RuntimeResolver::with_probe(PathProbe::with_search_path(temp_dir.path()));
    let result = resolver.detect_runtimes("file.ts").unwrap();

    assert_eq!(result.family, RuntimeFamily::TypedScript);
    assert_eq!(result.available, vec!["deno"]);
    assert_eq!(result.unavailable, vec!["bun", "tsx", "ts-node", "nix-shell"]);
}

#[test]
fn test_non_executable_file_is_not_a_runtime() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("wasmer"), "not a program").unwrap();
    install(temp_dir.path(), "wasmtime");
    install(temp_dir.path(), "nix-shell");

    let resolver = RuntimeResolver::with_probe(PathProbe::with_search_path(temp_dir.path()));
    let result = resolver.detect_runtimes("module.wasm").unwrap();

    assert_eq!(result.available, vec!["wasmtime", "nix-shell"]);
    assert_eq!(result.unavailable, vec!["wasmer"]);
}

#[test]
fn test_runtime_installed_between_calls_is_seen() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = RuntimeResolver::with_probe(PathProbe::with_search_path(temp_dir.path()));

    let before = resolver.resolve(RuntimeFamily::Script);
    assert!(before.available.is_empty());
    assert!(matches!(
        resolver.select("index.js").unwrap_err(),
        Error::NoRuntimeAvailable { .. }
    ));

    install(temp_dir.path(), "node");
    install(temp_dir.path(), "deno");

    let after = resolver.resolve(RuntimeFamily::Script);
    assert_eq!(after.available, vec!["node", "deno"]);
    assert_eq!(after.unavailable, vec!["bun", "nix-shell"]);
    assert_eq!(resolver.select("index.js").unwrap(), "node");
}

#[test]
fn test_multiple_search_directories() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    install(first.path(), "tsx");
    install(second.path(), "bun");

    let search_path =
        std::env::join_paths([first.path(), second.path()]).expect("valid search path");
    let resolver = RuntimeResolver::with_probe(PathProbe::with_search_path(search_path));
    let result = resolver.resolve(RuntimeFamily::TypedScript);

    assert_eq!(result.available, vec!["bun", "tsx"]);
    assert_eq!(result.unavailable, vec!["deno", "ts-node", "nix-shell"]);
}

#[test]
fn test_parallel_resolution() {
    let temp_dir = TempDir::new().unwrap();
    install(temp_dir.path(), "bun");
    let resolver = RuntimeResolver::with_probe(PathProbe::with_search_path(temp_dir.path()));

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = RuntimeFamily::ALL
            .into_iter()
            .map(|family| {
                let resolver = &resolver;
                scope.spawn(move || resolver.resolve(family))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (family, result) in RuntimeFamily::ALL.into_iter().zip(results) {
        assert_eq!(result, resolver.resolve(family));
    }
}
