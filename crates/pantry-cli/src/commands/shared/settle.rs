use pantry_state::AsyncState;

/// Turn a finished request state into a result for the command.
pub fn settle<T>(state: AsyncState<T>, what: &str) -> anyhow::Result<T> {
    if let Some(error) = state.error {
        anyhow::bail!("{what}: {error}");
    }
    state
        .data
        .ok_or_else(|| anyhow::anyhow!("{what}: no data returned"))
}
