use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, storage_warning};

/// Handle `veille project delete` and `veille delete-project`.
pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.delete_project(id);
    if !response.deleted {
        tracing::info!(project_id = id, "no such project; nothing deleted");
    }
    storage_warning(response.storage_warning.as_deref());
    output(&response, flags.format)
}
