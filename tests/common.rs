#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sst() -> Command {
    cargo_bin_cmd!("salarysheet")
}

/// Create an empty, unique output directory inside the system temp dir
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_salarysheet", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create out dir");
    path.to_string_lossy().to_string()
}

/// Write a shell script into the temp dir and return its path
pub fn write_script(name: &str, lines: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_script.txt", name));
    fs::write(&path, lines.join("\n")).expect("write script");
    path.to_string_lossy().to_string()
}
