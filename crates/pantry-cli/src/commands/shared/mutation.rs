use pantry_state::AsyncState;
use serde::Serialize;

use super::settle::settle;
use crate::context::AppContext;

/// Body printed after a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: i64,
    pub deleted: bool,
}

impl Deleted {
    pub const fn new(id: i64) -> Self {
        Self { id, deleted: true }
    }
}

/// Toast the outcome of a mutation, then settle it.
pub fn announce<T>(
    ctx: &mut AppContext,
    state: AsyncState<T>,
    success: &str,
    failure: &str,
) -> anyhow::Result<T> {
    if state.error.is_some() {
        ctx.notifier.error(failure);
    } else {
        ctx.notifier.success(success);
    }
    settle(state, failure)
}
