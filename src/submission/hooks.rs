use std::sync::Arc;

use async_trait::async_trait;

use super::Submission;

#[derive(Debug)]
pub struct HookError {
    pub message: String,
}

impl std::fmt::Display for HookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for HookError {
    fn from(s: String) -> Self {
        HookError { message: s }
    }
}

/// Extension point for observing decoded submissions.
///
/// Hooks run after decoding and before the acknowledgment is sent; a hook
/// failure is logged and never changes the response.
#[async_trait]
pub trait SubmissionHook: Send + Sync {
    fn id(&self) -> &str;
    async fn observe(&self, submission: &Submission) -> Result<(), HookError>;
}

pub struct HookRegistry {
    hooks: Vec<Arc<dyn SubmissionHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register(&mut self, hook: Arc<dyn SubmissionHook>) {
        self.hooks.push(hook);
    }

    pub async fn dispatch(&self, submission: &Submission) {
        for hook in &self.hooks {
            if let Err(e) = hook.observe(submission).await {
                tracing::error!("Submission hook {} failed: {e}", hook.id());
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Records each submission through tracing.
pub struct LogHook;

impl LogHook {
    pub fn new() -> Self {
        LogHook
    }
}

impl Default for LogHook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionHook for LogHook {
    fn id(&self) -> &str {
        "log"
    }

    async fn observe(&self, submission: &Submission) -> Result<(), HookError> {
        let payload = serde_json::to_string(submission)
            .map_err(|e| HookError::from(format!("Failed to serialize submission: {e}")))?;
        tracing::info!(fields = submission.len(), "Received submission: {payload}");
        Ok(())
    }
}
