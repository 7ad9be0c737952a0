//! Runs the `search_fixture` binary in separate processes and checks that
//! its `key=value` report does not depend on the working directory, the
//! locale, or unrelated environment variables.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

/// Environment variables cleared before every fixture run.
const SCRUBBED: [&str; 5] = ["LC_ALL", "LC_COLLATE", "LANG", "LANGUAGE", "RUST_LOG"];

fn repo_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("lock-tests sits two levels below the repo root")
}

/// Run the fixture and split its stdout into an ordered key/value map.
fn fixture_report(cwd: &Path, vars: &[(&str, &str)]) -> BTreeMap<String, String> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_search_fixture"));
    command.current_dir(cwd);
    for name in SCRUBBED {
        command.env_remove(name);
    }
    command.envs(vars.iter().copied());

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("spawn search_fixture in {}: {e}", cwd.display()));
    assert!(
        output.status.success(),
        "search_fixture exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("fixture prints UTF-8");
    stdout
        .lines()
        .map(|line| {
            let (key, value) = line
                .split_once('=')
                .unwrap_or_else(|| panic!("fixture line without '=': {line:?}"));
            (key.to_string(), value.to_string())
        })
        .collect()
}

#[test]
fn fixture_report_is_stable_across_processes() {
    let root = repo_root();
    let baseline = fixture_report(root, &[]);

    assert_eq!(baseline["graph.ucs.path"], "A -> C -> B -> D (Total cost: 3)");
    assert_eq!(baseline["graph.bfs.path"], "A -> B -> D (Total cost: 4)");
    assert_eq!(baseline["puzzle.moves"], "14");
    assert_eq!(baseline["jugs.pours"], "7");
    assert_eq!(baseline["report.runs"], "5");
    for key in [
        "graph.ucs.trace_digest",
        "puzzle.solution_digest",
        "report.digest",
    ] {
        assert!(baseline[key].starts_with("sha256:"), "{key} = {}", baseline[key]);
    }

    let elsewhere = std::env::temp_dir();
    let variants: [(&str, &Path, &[(&str, &str)]); 3] = [
        ("temp dir as cwd", elsewhere.as_path(), &[]),
        ("C locale", root, &[("LC_ALL", "C"), ("LANG", "C")]),
        // The fixture installs no subscriber, so RUST_LOG must stay off stdout.
        (
            "noisy env",
            root,
            &[
                ("WAYFINDER_NOISE", "1"),
                ("RUST_LOG", "trace"),
                ("TZ", "Pacific/Chatham"),
            ],
        ),
    ];
    for (label, cwd, vars) in variants {
        assert_eq!(baseline, fixture_report(cwd, vars), "report changed under {label}");
    }
}
