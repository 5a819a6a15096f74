use crate::cli::subcommands::AssistCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::blocks::{render_blocks, render_citations};
use crate::output::output;
use crate::progress::with_spinner;
use crate::ui;

/// Handle `veille assist`.
pub async fn handle(action: &AssistCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AssistCommands::Strategy {
            topic,
            context,
            location,
        } => {
            let strategy = with_spinner(
                "Drafting a monitoring strategy…",
                ctx.service.assist_strategy(
                    topic,
                    context.as_deref().unwrap_or_default(),
                    location.as_deref(),
                ),
            )
            .await?;
            output(&strategy, flags.format)
        }
        AssistCommands::Trends {
            topic,
            context,
            location,
        } => {
            let report = with_spinner(
                "Searching the web for recent developments…",
                ctx.service
                    .assist_trends(topic, context.as_deref(), location.as_deref()),
            )
            .await?;
            if flags.format == OutputFormat::Text {
                let color = ui::prefs().color;
                let blocks = veille_core::format::format_content(&report.report_text);
                println!("{}", render_blocks(&blocks, color));
                let citations = render_citations(&report.citations, color);
                if !citations.is_empty() {
                    println!("\n{citations}");
                }
                return Ok(());
            }
            output(&report, flags.format)
        }
    }
}
