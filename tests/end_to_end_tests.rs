// tests/end_to_end_tests.rs
//
// End-to-end tests driving the gcd-calc binary: configuration, engine
// selection, timing output, benchmark reports and error exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use gcd_calc::benchmark::BenchmarkSuite;
use gcd_calc::GcdAlgorithm;

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    fn gcd_calc(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_gcd-calc"))
            .current_dir(dir)
            .env("RUST_LOG", "off")
            .args(args)
            .output()
            .expect("failed to launch gcd-calc")
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    #[test]
    fn test_compute_with_each_engine() {
        let dir = tempfile::tempdir().unwrap();

        for engine in ["euclidean", "stein"] {
            let output = gcd_calc(dir.path(), &["compute", "--algorithm", engine, "48", "-18", "30"]);
            assert!(output.status.success(), "{} failed: {:?}", engine, output);
            assert_eq!(stdout(&output).trim(), "6");
        }
    }

    #[test]
    fn test_timed_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = gcd_calc(dir.path(), &["compute", "--timed", "17", "5", "3"]);

        assert!(output.status.success());
        let text = stdout(&output);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("1"));
        assert!(lines.next().map_or(false, |l| l.starts_with("elapsed: ") && l.ends_with(" ms")));
    }

    #[test]
    fn test_config_file_selects_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gcd.toml"), "algorithm = \"stein\"\ntimed = true\n").unwrap();

        let output = gcd_calc(dir.path(), &["compute", "0", "7"]);
        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.starts_with("7\n"));
        assert!(text.contains("elapsed:"));
    }

    #[test]
    fn test_invalid_input_exits_with_error() {
        let dir = tempfile::tempdir().unwrap();

        let zeros = gcd_calc(dir.path(), &["compute", "0", "0", "0"]);
        assert_eq!(zeros.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&zeros.stderr).contains("all operands are zero"));

        let min = gcd_calc(dir.path(), &["compute", "-2147483648", "0"]);
        assert_eq!(min.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&min.stderr).contains("i32::MIN"));

        let word = gcd_calc(dir.path(), &["compute", "12", "twelve"]);
        assert_eq!(word.status.code(), Some(1));

        let engine = gcd_calc(dir.path(), &["compute", "-a", "fermat", "12", "8"]);
        assert_eq!(engine.status.code(), Some(1));
    }

    #[test]
    fn test_bench_and_compare() {
        let dir = tempfile::tempdir().unwrap();
        let baseline = dir.path().join("baseline.json");
        let current = dir.path().join("current.json");

        for path in [&baseline, &current] {
            let output = gcd_calc(
                dir.path(),
                &["bench", "--iterations", "100", "--operands", "3", "--output", path.to_str().unwrap()],
            );
            assert!(output.status.success(), "bench failed: {:?}", output);
        }

        let suite = BenchmarkSuite::load_from_file(&baseline).unwrap();
        assert_eq!(suite.settings.iterations, 100);
        assert_eq!(suite.settings.operand_count, 3);
        assert!(suite.engines_agree);
        assert!(suite.find(GcdAlgorithm::Stein).is_some());

        let output = gcd_calc(dir.path(), &["compare", baseline.to_str().unwrap(), current.to_str().unwrap()]);
        assert!(output.status.success());
        assert!(stdout(&output).contains("euclidean"));
    }
}
