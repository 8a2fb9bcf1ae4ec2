use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use studbud_core::StudentProfile;

/// `$STUDBUD_HOME`, else `~/.studbud`.
pub fn studbud_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("STUDBUD_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".studbud"))
}

pub fn ensure_studbud_home() -> Result<PathBuf> {
    let dir = studbud_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_studbud_home()?.join("profile.json"))
}

pub fn write_profile(path: &Path, profile: &StudentProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Read the saved profile, or `None` if setup was never run.
pub fn read_profile(path: &Path) -> Result<Option<StudentProfile>> {
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let profile = serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(profile))
}
