use crate::traits::{FileSystem, Output, RealFileSystem, TerminalOutput, WorkflowOutput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub fs: Arc<dyn FileSystem>,
    pub output: Arc<dyn Output>,
}

impl Context {
    /// Create a context with real implementations.
    ///
    /// Inside GitHub Actions output is written as workflow commands, otherwise
    /// as styled terminal lines.
    pub fn new(workflow_commands: bool, debug: bool) -> Self {
        let output: Arc<dyn Output> = if workflow_commands {
            Arc::new(WorkflowOutput)
        } else {
            Arc::new(TerminalOutput::new(debug))
        };

        Self {
            fs: Arc::new(RealFileSystem),
            output,
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(fs: Arc<dyn FileSystem>, output: Arc<dyn Output>) -> Self {
        Self { fs, output }
    }
}
