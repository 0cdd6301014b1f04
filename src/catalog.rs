//! Log file discovery in the bench data directory.
//!
//! Bench recorders embed the selection tokens (coil name, receiver channel,
//! signal code) directly in the file name, with no fixed delimiter or
//! position, e.g. `DCP_MSEQ0_VDH_2024-01-01.txt`. Lookup scans the data
//! directory and returns the first entry matching every token.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// How selection tokens are matched against file names.
///
/// `Substring` reproduces the historical behavior: case-sensitive
/// containment, first entry in scan order wins. When naming conventions
/// overlap (`MSEQ` is a substring of `MSEQ1`), several files can satisfy
/// the same query and the winner depends on file-system ordering.
/// `ExactToken` removes that ambiguity by requiring each token to match a
/// whole delimiter-separated component run of the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    #[default]
    Substring,
    ExactToken,
}

/// Find the first file in `dir` whose name matches all `tokens`.
///
/// Directory entries are visited in whatever order the file system yields
/// them; no sorting is applied.
///
/// # Returns
///
/// * `Ok(Some(path))` - first matching entry
/// * `Ok(None)` - no entry satisfies every token
/// * `Err(e)` - the directory itself could not be scanned
pub fn locate(
    dir: &Path,
    tokens: &[&str],
    strategy: MatchStrategy,
) -> io::Result<Option<PathBuf>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if matches(name, tokens, strategy) {
            log::info!("Found file {} for tokens {:?}", name, tokens);
            return Ok(Some(entry.path()));
        }
    }

    log::info!("No matching file found for tokens {:?}", tokens);
    Ok(None)
}

/// Check one file name against the token set.
fn matches(name: &str, tokens: &[&str], strategy: MatchStrategy) -> bool {
    match strategy {
        MatchStrategy::Substring => tokens.iter().all(|token| name.contains(token)),
        MatchStrategy::ExactToken => {
            // Compare against the delimiter-split components of the name,
            // extension excluded. Tokens may carry delimiters themselves
            // (coil "KNEE_16"), so a token matches when its own component
            // run appears contiguously in the name.
            const DELIMITERS: [char; 4] = ['_', '-', '.', ' '];
            let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);
            let components: Vec<&str> = stem.split(DELIMITERS).collect();
            tokens.iter().all(|token| {
                let token_components: Vec<&str> = token.split(DELIMITERS).collect();
                components
                    .windows(token_components.len())
                    .any(|window| window == token_components)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn dir_with_files(names: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    fn located_name(result: Option<PathBuf>) -> String {
        result
            .unwrap()
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_unique_match_is_returned() {
        let dir = dir_with_files(&[
            "COIL_A_MSEQ0_VDH.txt",
            "COIL_A_MSEQ0_VDL.txt",
            "COIL_B_MSEQ0_VDH.txt",
        ]);

        let result = locate(
            dir.path(),
            &["COIL_A", "MSEQ0", "VDH"],
            MatchStrategy::Substring,
        )
        .unwrap();
        assert_eq!(located_name(result), "COIL_A_MSEQ0_VDH.txt");
    }

    #[test]
    fn test_no_match_returns_none() {
        let dir = dir_with_files(&["COIL_A_MSEQ0_VDH.txt"]);

        let result = locate(
            dir.path(),
            &["COIL_A", "MSEQ1", "VDH"],
            MatchStrategy::Substring,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_directory_returns_none() {
        let dir = tempfile::tempdir().unwrap();

        let result = locate(dir.path(), &["COIL_A"], MatchStrategy::Substring).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_ambiguous_query_returns_one_candidate() {
        // Both files satisfy the token set; scan order decides the winner.
        let dir = dir_with_files(&["COIL_A_MSEQ0_VDH.txt", "COIL_A_MSEQ0_VDL.txt"]);

        let result = locate(dir.path(), &["COIL_A", "MSEQ0"], MatchStrategy::Substring).unwrap();
        let name = located_name(result);
        assert!(name == "COIL_A_MSEQ0_VDH.txt" || name == "COIL_A_MSEQ0_VDL.txt");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("missing");

        assert!(locate(&gone, &["COIL_A"], MatchStrategy::Substring).is_err());
    }

    #[test]
    fn test_substring_accepts_prefix_collision() {
        let dir = dir_with_files(&["COIL_A_MSEQ1_VDH.txt"]);

        // "MSEQ" is contained in "MSEQ1", so substring matching hits.
        let result = locate(dir.path(), &["COIL_A", "MSEQ"], MatchStrategy::Substring).unwrap();
        assert!(result.is_some());
    }

    #[test]
    fn test_exact_token_rejects_prefix_collision() {
        let dir = dir_with_files(&["COIL_A_MSEQ1_VDH.txt"]);

        let result = locate(dir.path(), &["COIL_A", "MSEQ"], MatchStrategy::ExactToken).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_exact_token_matches_whole_components() {
        let dir = dir_with_files(&["DCP_MSEQ0_VDH_2024-01-01.txt", "DCP_MSEQ0_VDL.txt"]);

        let result = locate(
            dir.path(),
            &["DCP", "MSEQ0", "VDH"],
            MatchStrategy::ExactToken,
        )
        .unwrap();
        assert_eq!(located_name(result), "DCP_MSEQ0_VDH_2024-01-01.txt");
    }

    #[test]
    fn test_exact_token_accepts_delimited_coil_names() {
        let dir = dir_with_files(&["KNEE_16_MSEQ2_VLNA.txt", "KNEE_8_MSEQ2_VLNA.txt"]);

        let result = locate(
            dir.path(),
            &["KNEE_16", "MSEQ2", "VLNA"],
            MatchStrategy::ExactToken,
        )
        .unwrap();
        assert_eq!(located_name(result), "KNEE_16_MSEQ2_VLNA.txt");
    }

    #[test]
    fn test_exact_token_ignores_extension() {
        let dir = dir_with_files(&["DCP_MSEQ0_VDH.txt"]);

        // "txt" is not a name component.
        let result = locate(dir.path(), &["DCP", "txt"], MatchStrategy::ExactToken).unwrap();
        assert!(result.is_none());
    }
}
