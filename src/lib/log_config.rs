//! Log4j configuration discovery
//!
//! Looks for a log4j2 configuration inside the configuration directory and turns
//! the first match into a JVM system property flag. A test configuration, when
//! present, always shadows the production one.

use std::path::Path;

use tracing::debug;

/// Candidate file names, in lookup order
pub const LOG_CONFIG_CANDIDATES: [&str; 2] = ["log4j2-test.xml", "log4j2.xml"];

/// JVM system property that points log4j2 at its configuration file
pub const LOG_CONFIG_PROPERTY: &str = "log4j.configurationFile";

/// Build the `-D` flag for a configuration file
pub fn log_config_flag(file: &Path) -> String {
    format!("-D{}={}", LOG_CONFIG_PROPERTY, file.display())
}

/// Resolve the log configuration flag, checking the real filesystem
pub fn discover_log_config(config_dir: &Path, override_flag: Option<&str>) -> Option<String> {
    discover_log_config_with(config_dir, override_flag, |p| p.is_file())
}

/// Resolve the log configuration flag using `is_file` as the existence probe
///
/// A non-empty `override_flag` is returned verbatim without probing.
pub fn discover_log_config_with<F>(
    config_dir: &Path,
    override_flag: Option<&str>,
    mut is_file: F,
) -> Option<String>
where
    F: FnMut(&Path) -> bool,
{
    if let Some(flag) = override_flag.filter(|f| !f.is_empty()) {
        debug!(flag, "using log configuration override");
        return Some(flag.to_string());
    }

    let found = LOG_CONFIG_CANDIDATES
        .iter()
        .map(|name| config_dir.join(name))
        .find(|candidate| is_file(candidate));

    match found {
        Some(file) => {
            debug!(file = %file.display(), "found log configuration");
            Some(log_config_flag(&file))
        }
        None => {
            debug!(dir = %config_dir.display(), "no log configuration found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_override_skips_probe() {
        let mut probes = 0;
        let flag = discover_log_config_with(Path::new("/etc/zk"), Some("-Dcustom=1"), |_| {
            probes += 1;
            true
        });
        assert_eq!(flag.as_deref(), Some("-Dcustom=1"));
        assert_eq!(probes, 0);
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let flag = discover_log_config_with(Path::new("/etc/zk"), Some(""), |p| {
            p.ends_with("log4j2.xml")
        });
        assert_eq!(
            flag.as_deref(),
            Some("-Dlog4j.configurationFile=/etc/zk/log4j2.xml")
        );
    }

    #[test]
    fn test_probe_stops_at_first_match() {
        let mut probed: Vec<PathBuf> = Vec::new();
        let flag = discover_log_config_with(Path::new("/etc/zk"), None, |p| {
            probed.push(p.to_path_buf());
            true
        });
        assert_eq!(
            flag.as_deref(),
            Some("-Dlog4j.configurationFile=/etc/zk/log4j2-test.xml")
        );
        assert_eq!(probed, vec![PathBuf::from("/etc/zk/log4j2-test.xml")]);
    }

    #[test]
    fn test_probe_order() {
        let mut probed: Vec<PathBuf> = Vec::new();
        let flag = discover_log_config_with(Path::new("/etc/zk"), None, |p| {
            probed.push(p.to_path_buf());
            false
        });
        assert!(flag.is_none());
        assert_eq!(
            probed,
            vec![
                PathBuf::from("/etc/zk/log4j2-test.xml"),
                PathBuf::from("/etc/zk/log4j2.xml"),
            ]
        );
    }

    #[test]
    fn test_directory_named_like_candidate_is_not_a_match() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("log4j2-test.xml")).unwrap();
        assert_eq!(discover_log_config(dir.path(), None), None);
    }
}
