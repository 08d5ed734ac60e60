// rulebench-core/src/application/scope.rs

use tokio_util::sync::CancellationToken;

/// Lifetime of a mounted view.
///
/// Async work started on behalf of a view captures its scope and checks it
/// before applying a response; once `teardown` ran, late responses are dropped.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn teardown(&self) {
        self.token.cancel();
    }
}
