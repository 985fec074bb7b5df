//! CLI route: builds the engine from CLI inputs and dispatches commands.

use crate::cli::parse::Commands;
use crate::cli::presentation;
use crate::config::{default_baseline_path, VigilConfig};
use crate::engine::{EngineConfig, IntegrityEngine};
use crate::error::EngineError;
use std::path::PathBuf;

/// Rendered output plus the process exit code for a completed command.
#[derive(Debug)]
pub struct CommandOutcome {
    pub output: String,
    /// 0 on success; 1 when verify found changes
    pub exit_code: i32,
}

/// Runtime context for CLI execution: resolved configuration and the engine
/// facade. Built once per invocation; commands dispatch through it.
pub struct RunContext {
    engine: IntegrityEngine,
}

impl RunContext {
    /// Resolve configuration and build the engine.
    ///
    /// CLI arguments take priority over the config file; the baseline path
    /// falls back to the per-root data location when neither supplies one.
    pub fn new(
        root: PathBuf,
        baseline: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, EngineError> {
        let file_config = VigilConfig::load(config_path.as_deref())?;

        let root = if root == PathBuf::from(".") {
            file_config.root.clone().unwrap_or(root)
        } else {
            root
        };

        let baseline_path = match baseline.or_else(|| file_config.baseline_path.clone()) {
            Some(path) => path,
            None => default_baseline_path(&root)?,
        };

        let engine = IntegrityEngine::new(EngineConfig {
            root,
            baseline_path,
            walker: file_config.scanner.walker_config(),
        });
        Ok(Self { engine })
    }

    /// The engine this context dispatches to.
    pub fn engine(&self) -> &IntegrityEngine {
        &self.engine
    }

    /// Execute a parsed command and return its rendered outcome.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutcome, EngineError> {
        match command {
            Commands::Snapshot => {
                let summary = self.engine.snapshot()?;
                Ok(CommandOutcome {
                    output: presentation::render_snapshot_summary(&summary),
                    exit_code: 0,
                })
            }
            Commands::Verify { format, all } => {
                let report = self.engine.verify()?;
                let output = if format == "json" {
                    presentation::render_verify_json(&report, *all)?
                } else {
                    presentation::render_verify_text(&report, *all)
                };
                let exit_code = if report.is_clean() { 0 } else { 1 };
                Ok(CommandOutcome { output, exit_code })
            }
        }
    }
}
