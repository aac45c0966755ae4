// src/benchmark/system_info.rs

use serde::{Deserialize, Serialize};
use std::env;

const UNKNOWN: &str = "unknown";

/// Host and build details recorded with every benchmark report, so runs
/// from different machines or commits are not compared blindly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub cpu_threads: usize,
    pub total_memory_mb: u64,
    pub git: GitInfo,
    pub rust_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitInfo {
    pub commit: String,
    pub branch: String,
    pub dirty: bool,
}

impl SystemInfo {
    pub fn collect() -> Self {
        use sysinfo::System;

        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_model = sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let os = format!(
            "{} {}",
            System::name().unwrap_or_else(|| UNKNOWN.to_string()),
            System::os_version().unwrap_or_default(),
        );

        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
            os: os.trim().to_string(),
            cpu_model,
            cpu_threads: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            git: GitInfo::collect(),
            rust_version: Self::rust_version(),
        }
    }

    fn rust_version() -> String {
        env::var("RUSTC_VERSION").unwrap_or_else(|_| {
            std::process::Command::new("rustc")
                .arg("--version")
                .output()
                .ok()
                .and_then(|output| String::from_utf8(output.stdout).ok())
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| UNKNOWN.to_string())
        })
    }

    pub fn to_string_pretty(&self) -> String {
        format!(
            "System Information:\n  Host:   {} ({})\n  CPU:    {} ({} threads)\n  Memory: {} MB\n  Git:    {}\n  Rust:   {}\n",
            self.hostname,
            self.os,
            self.cpu_model,
            self.cpu_threads,
            self.total_memory_mb,
            self.git.short(),
            self.rust_version,
        )
    }
}

impl GitInfo {
    fn collect() -> Self {
        let Ok(repo) = git2::Repository::discover(".") else {
            return Self::unknown();
        };
        let head = repo.head().ok();

        GitInfo {
            commit: head.as_ref()
                .and_then(|h| h.peel_to_commit().ok())
                .map(|c| c.id().to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            branch: head.as_ref()
                .and_then(|h| h.shorthand())
                .unwrap_or(UNKNOWN)
                .to_string(),
            dirty: repo.statuses(None)
                .map(|statuses| !statuses.is_empty())
                .unwrap_or(false),
        }
    }

    pub fn unknown() -> Self {
        GitInfo {
            commit: UNKNOWN.to_string(),
            branch: UNKNOWN.to_string(),
            dirty: false,
        }
    }

    /// `abcdef12 (main) [dirty]`
    pub fn short(&self) -> String {
        format!(
            "{} ({}){}",
            self.commit.chars().take(8).collect::<String>(),
            self.branch,
            if self.dirty { " [dirty]" } else { "" },
        )
    }
}
