use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
}

pub fn list_entries(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    // 連番はこの列挙順に結び付くため並べ替えない
    for entry in
        fs::read_dir(dir).with_context(|| format!("フォルダを読めませんでした: {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("エントリ読み取り失敗: {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("エントリ種別を取得できませんでした: {}", dir.display()))?;
        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_directory: file_type.is_dir(),
        });
    }

    Ok(entries)
}
