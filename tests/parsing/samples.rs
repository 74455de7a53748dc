#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use exprcheck::parsing;

    fn sample_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_valid() {
        let mut failures = Vec::new();

        for file in &sample_files(Path::new("tests/samples/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            for (line, analysis) in content
                .lines()
                .zip(parsing::validate_lines(&content))
            {
                if !analysis.is_valid() {
                    println!("Line '{}' in {:?} failed: {:?}", line, file, analysis.verdict);
                    failures.push(line.to_string());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample lines should be valid, but {} lines failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_invalid() {
        let mut unexpected_successes = Vec::new();

        for file in &sample_files(Path::new("tests/broken/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            for (line, analysis) in content
                .lines()
                .zip(parsing::validate_lines(&content))
            {
                if analysis.is_valid() {
                    println!("Line '{}' in {:?} unexpectedly valid", line, file);
                    unexpected_successes.push(line.to_string());
                }
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken lines should not be valid, but {} lines passed",
                unexpected_successes.len()
            );
        }
    }
}
