use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Dependencies each crate must not take on.
const FORBIDDEN_DEPS: &[(&str, &[&str])] = &[
    (
        "opsmgr-domain",
        &["opsmgr-shared", "opsmgr-runner", "tracing", "anyhow", "tokio"],
    ),
    ("opsmgr-shared", &["opsmgr-runner", "anyhow", "tokio"]),
];

/// Domain sources must stay free of I/O and logging.
const DOMAIN_SRC: &str = "crates/domain/src";
const FORBIDDEN_DOMAIN_USE: &str = r"^\s*use\s+(tracing|tokio|anyhow|std::fs|std::net)\b";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let mut violations = dependency_violations(&metadata.packages);
    violations.extend(domain_source_violations(
        &metadata.workspace_root.join(DOMAIN_SRC),
    )?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(packages: &[Package]) -> Vec<String> {
    let by_name: BTreeMap<&str, &Package> =
        packages.iter().map(|p| (p.name.as_str(), p)).collect();

    let mut violations = Vec::new();
    for (crate_name, forbidden) in FORBIDDEN_DEPS {
        let Some(package) = by_name.get(crate_name) else {
            continue;
        };
        // dev-dependencies are free to use anything
        for dep in package
            .dependencies
            .iter()
            .filter(|d| d.kind.as_deref() != Some("dev"))
        {
            if forbidden.contains(&dep.name.as_str()) {
                violations.push(format!("{crate_name} must not depend on {}", dep.name));
            }
        }
    }
    violations
}

fn domain_source_violations(src: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(FORBIDDEN_DOMAIN_USE).context("compiling pattern")?;
    let mut violations = Vec::new();
    for file in rust_files(src)? {
        let content = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (index, line) in content.lines().enumerate() {
            if pattern.is_match(line) {
                violations.push(format!(
                    "{}:{}: domain must not import `{}`",
                    file.display(),
                    index + 1,
                    line.trim()
                ));
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
