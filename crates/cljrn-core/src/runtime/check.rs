//! Toolchain detection for npm and npx

use std::path::PathBuf;

/// Executables the transformation shells out to
pub const REQUIRED_TOOLS: &[&str] = &["npx", "npm"];

/// Toolchain detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub path: Option<PathBuf>,
    pub available: bool,
}

impl RuntimeInfo {
    fn from_lookup(name: &'static str, found: Option<PathBuf>) -> Self {
        Self {
            name,
            available: found.is_some(),
            path: found,
        }
    }

    /// Warning shown when the tool is missing
    pub fn missing_message(&self) -> String {
        format!("{} not in path. Did you install npm correctly?", self.name)
    }
}

/// Check if an executable is reachable through `PATH`
pub fn check_tool(name: &'static str) -> RuntimeInfo {
    RuntimeInfo::from_lookup(name, which::which(name).ok())
}

/// Check an executable against an explicit search path
#[cfg(test)]
fn check_tool_in<P: AsRef<std::ffi::OsStr>>(
    name: &'static str,
    search_path: P,
    cwd: &std::path::Path,
) -> RuntimeInfo {
    RuntimeInfo::from_lookup(name, which::which_in(name, Some(search_path), cwd).ok())
}

/// Check every required tool; missing tools are reported, never fatal
pub fn resolve_toolchain() -> Vec<RuntimeInfo> {
    REQUIRED_TOOLS.iter().copied().map(check_tool).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_reported() {
        let dir = tempfile::tempdir().unwrap();
        let info = check_tool_in("npx", dir.path(), dir.path());
        assert!(!info.available);
        assert!(info.path.is_none());
        assert_eq!(
            info.missing_message(),
            "npx not in path. Did you install npm correctly?"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_on_search_path_found() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let npm = dir.path().join("npm");
        std::fs::write(&npm, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&npm, std::fs::Permissions::from_mode(0o755)).unwrap();

        let info = check_tool_in("npm", dir.path(), dir.path());
        assert!(info.available);
        assert_eq!(info.path, Some(npm));
    }

    #[test]
    fn test_resolve_toolchain_checks_both_tools() {
        let names: Vec<_> = resolve_toolchain().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["npx", "npm"]);
    }
}
