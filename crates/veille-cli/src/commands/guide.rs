use std::fmt::Write;

use veille_core::catalog::{MonitoringStep, STEPS, TOOLS};

use crate::cli::subcommands::GuideCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `veille guide`.
pub fn handle(action: &GuideCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GuideCommands::Steps if flags.format == OutputFormat::Text => {
            println!("{}", steps_text(STEPS));
            Ok(())
        }
        GuideCommands::Steps => output(&STEPS, flags.format),
        GuideCommands::Tools => output(&TOOLS, flags.format),
    }
}

fn steps_text(steps: &[MonitoringStep]) -> String {
    let mut out = String::new();
    for (index, step) in steps.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}\n{}", step.title, step.description);
        for tip in step.tips {
            let _ = writeln!(out, "  • {tip}");
        }
    }
    out.trim_end().to_string()
}
