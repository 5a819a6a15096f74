use std::io::{IsTerminal, Read};

use anyhow::Context;
use serde::Serialize;
use veille_core::format::{Block, format_content};
use veille_core::responses::RenderResponse;

use crate::cli::root_commands::RenderArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::blocks::render_blocks;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct BlockRow {
    line: usize,
    kind: &'static str,
    text: String,
}

fn rows(blocks: &[Block]) -> Vec<BlockRow> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| BlockRow {
            line: index + 1,
            kind: block.kind().as_str(),
            text: block.plain_text(),
        })
        .collect()
}

/// Handle `veille render`.
pub fn handle(args: &RenderArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let content = read_input(args)?;
    let blocks = format_content(&content);

    match flags.format {
        OutputFormat::Text => {
            println!("{}", render_blocks(&blocks, ui::prefs().color));
            Ok(())
        }
        OutputFormat::Table => output(&rows(&blocks), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&RenderResponse { blocks }, flags.format),
    }
}

fn read_input(args: &RenderArgs) -> anyhow::Result<String> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("nothing to render; pass --content, --file, or pipe text on stdin");
    }
    let mut content = String::new();
    stdin
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    Ok(content)
}
