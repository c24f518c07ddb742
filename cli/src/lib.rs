use log::{debug, info};
use scriptkit_txscript::Script;
use std::io::{BufRead, Write};

pub mod args;
pub mod error;
pub mod report;

use args::{Args, OutputFormat};
pub use error::{Error, Result};
use report::ScriptReport;

fn parse_input(input: &str, asm: bool) -> Result<Script> {
    let parsed = if asm { Script::from_asm(input) } else { Script::from_hex(input) };
    parsed.map_err(|err| Error::InvalidScript(input.to_string(), err))
}

/// Collects the scripts named on the command line, falling back to one script per
/// non-empty line of `input`.
fn collect_scripts(args: &Args, input: impl BufRead) -> Result<Vec<String>> {
    if !args.scripts.is_empty() {
        return Ok(args.scripts.clone());
    }
    let mut scripts = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            scripts.push(line.to_string());
        }
    }
    Ok(scripts)
}

/// Classifies every script given by `args` (or read from `input`) and writes the reports to `out`.
pub fn run(args: &Args, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let scripts = collect_scripts(args, input)?;
    if scripts.is_empty() {
        return Err("no scripts to classify".into());
    }
    debug!("Classifying {} script(s) as {}", scripts.len(), if args.asm { "asm" } else { "hex" });

    let reports = scripts
        .iter()
        .map(|s| parse_input(s, args.asm).map(|script| ScriptReport::new(script, args.view)))
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Text => {
            for report in reports.iter() {
                writeln!(out, "{report}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
    }

    let standard = reports.iter().filter(|report| report.template.is_standard()).count();
    info!("Classified {} script(s), {} standard", reports.len(), standard);
    Ok(())
}
