use crate::planner::RenamePlan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFailure {
    pub source_name: String,
    pub destination_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResult {
    pub renamed: usize,
    pub failures: Vec<RenameFailure>,
}

impl RunResult {
    pub fn attempted(&self) -> usize {
        self.renamed + self.failures.len()
    }
}

// 1件の失敗で残りを止めない。失敗は結果に記録して続行する。
pub fn execute_plan(dir: &Path, plan: &RenamePlan) -> RunResult {
    let mut result = RunResult::default();

    for item in &plan.items {
        let source = dir.join(&item.source_name);
        let destination = dir.join(&item.destination_name);
        match fs::rename(&source, &destination) {
            Ok(()) => result.renamed += 1,
            Err(err) => result.failures.push(RenameFailure {
                source_name: item.source_name.clone(),
                destination_name: item.destination_name.clone(),
                reason: err.to_string(),
            }),
        }
    }

    result
}
