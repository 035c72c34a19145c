//! Resolution of the acting user

use crate::contract::{CallerContext, CurrentUser};
use async_trait::async_trait;

/// Resolves the user behind a request
///
/// Token validation and session lookup live behind this trait; the service
/// only consumes the outcome.
#[async_trait]
pub trait CallerResolver: Send + Sync {
    async fn current_user(&self, caller: &CallerContext) -> anyhow::Result<CurrentUser>;
}
