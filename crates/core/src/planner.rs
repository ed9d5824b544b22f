use crate::listing::DirectoryEntry;
use crate::template::{expand, validate_template, TemplateError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlanItem {
    pub source_name: String,
    pub destination_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameStats {
    pub listed: usize,
    pub skipped_directories: usize,
    pub skipped_excluded: usize,
    pub planned: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub items: Vec<RenamePlanItem>,
    pub stats: RenameStats,
}

pub fn plan_batch(
    entries: &[DirectoryEntry],
    template: &str,
    exclusions: &HashSet<String>,
) -> Result<RenamePlan, TemplateError> {
    validate_template(template)?;

    let mut stats = RenameStats {
        listed: entries.len(),
        ..RenameStats::default()
    };
    let mut items = Vec::with_capacity(entries.len());

    // 連番は生の列挙位置に対して振る。スキップしたエントリも番号を消費する。
    for (position, entry) in entries.iter().enumerate() {
        if entry.is_directory {
            stats.skipped_directories += 1;
            continue;
        }
        if exclusions.contains(&entry.name) {
            stats.skipped_excluded += 1;
            continue;
        }

        let index = position + 1;
        let destination = format!("{}{}", expand(template, index), extension_with_dot(&entry.name));
        items.push(RenamePlanItem {
            source_name: entry.name.clone(),
            destination_name: destination,
        });
    }

    stats.planned = items.len();
    Ok(RenamePlan { items, stats })
}

pub fn plan_single(entries: &[DirectoryEntry], target_name: &str, new_name: &str) -> RenamePlan {
    let mut stats = RenameStats {
        listed: entries.len(),
        ..RenameStats::default()
    };
    let mut items = Vec::new();

    if entries.iter().any(|entry| entry.name == target_name) {
        let destination = format!("{}{}", strip_extension(new_name), extension_with_dot(new_name));
        items.push(RenamePlanItem {
            source_name: target_name.to_string(),
            destination_name: destination,
        });
    }

    stats.planned = items.len();
    RenamePlan { items, stats }
}

fn extension_with_dot(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

fn strip_extension(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string())
}
