use serde::Serialize;
use veille_core::responses::{RefreshAllResponse, RefreshResponse};

use crate::cli::root_commands::RefreshArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::finding::get::print_finding_text;
use crate::context::AppContext;
use crate::output::{output, storage_warning};
use crate::progress::with_spinner;

/// One line of `veille refresh --all` in table/text output.
#[derive(Debug, Serialize)]
struct RefreshRow {
    project_id: String,
    status: &'static str,
    findings: Option<usize>,
    detail: String,
}

/// Handle `veille refresh`.
pub async fn handle(args: &RefreshArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.all {
        return refresh_all(ctx, flags).await;
    }

    let target = args.project_id.as_deref();
    let message = "Searching the web for recent developments…";
    let refreshed: RefreshResponse = with_spinner(message, ctx.service.refresh_target(target)).await?;
    storage_warning(refreshed.storage_warning.as_deref());

    if flags.format == OutputFormat::Text {
        print_finding_text(&refreshed.project_id, &refreshed.finding);
        return Ok(());
    }
    output(&refreshed, flags.format)
}

async fn refresh_all(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let message = "Refreshing every project…";
    let response = with_spinner(message, async {
        Ok::<_, anyhow::Error>(ctx.service.refresh_all().await)
    })
    .await?;
    for refreshed in &response.refreshed {
        storage_warning(refreshed.storage_warning.as_deref());
    }

    match flags.format {
        OutputFormat::Table | OutputFormat::Text => output(&rows(&response), flags.format)?,
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format)?,
    }

    if !response.failed.is_empty() && response.refreshed.is_empty() {
        anyhow::bail!("all {} refreshes failed", response.failed.len());
    }
    Ok(())
}

fn rows(response: &RefreshAllResponse) -> Vec<RefreshRow> {
    let ok = response.refreshed.iter().map(|refreshed| RefreshRow {
        project_id: refreshed.project_id.clone(),
        status: "ok",
        findings: Some(refreshed.total_findings),
        detail: refreshed.finding.id.clone(),
    });
    let failed = response.failed.iter().map(|failure| RefreshRow {
        project_id: failure.project_id.clone(),
        status: "failed",
        findings: None,
        detail: failure.error.clone(),
    });
    ok.chain(failed).collect()
}
