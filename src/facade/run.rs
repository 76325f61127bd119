use std::io::{BufRead, Write};

use descstat_cli_core::{
    DataTable, parse_number_line, prompt_line, prompt_numbers, render_json, render_preview,
    render_table, render_text,
};
use descstat_config::{OutputFormat, StatConf, VariableConf};
use descstat_core::{Sample, SummaryReport, Walkthrough, compute_with};

use crate::error::{ResultExt, RunReason, RunResult};

use super::args::{DescStatCli, FileArgs, ManualArgs, WalkthroughArgs};

/// Friends' ages used by `walkthrough` when no values are given.
pub const DEFAULT_WALKTHROUGH: [f64; 6] = [25.0, 28.0, 30.0, 32.0, 35.0, 40.0];

/// Runs one command against an already resolved config.
///
/// Reports go to `out`. Banners, prompts and previews go to `out` as well,
/// except with JSON output, where they go to `notes` so `out` holds only
/// the JSON document.
pub fn execute<R: BufRead, W: Write, N: Write>(
    cli: &DescStatCli,
    conf: &StatConf,
    input: &mut R,
    out: &mut W,
    notes: &mut N,
) -> RunResult<()> {
    match cli {
        DescStatCli::Manual(args) => run_manual(args, conf, input, out, notes),
        DescStatCli::File(args) => run_file(args, conf, input, out, notes),
        DescStatCli::Walkthrough(args) => run_walkthrough(args, out),
    }
}

fn notes_sink<'a>(
    conf: &StatConf,
    out: &'a mut dyn Write,
    notes: &'a mut dyn Write,
) -> &'a mut dyn Write {
    match conf.output().format {
        OutputFormat::Json => notes,
        OutputFormat::Text | OutputFormat::Table => out,
    }
}

fn run_manual<R: BufRead, W: Write, N: Write>(
    args: &ManualArgs,
    conf: &StatConf,
    input: &mut R,
    out: &mut W,
    notes: &mut N,
) -> RunResult<()> {
    let mut chat = notes_sink(conf, out, notes);
    writeln!(chat, "=== Analysis of manually entered data ===")
        .to_run_err(RunReason::Io, "write failed")?;
    let mut samples = Vec::with_capacity(conf.variables().len());
    for (idx, var) in conf.variables().iter().enumerate() {
        let values = match args.values.get(idx) {
            Some(line) => parse_number_line(line),
            None => prompt_numbers(input, &mut chat, &var.name),
        }
        .to_run_err(RunReason::Input, &format!("cannot read values of {}", var.name))?;
        samples.push((var.name.clone(), values));
    }
    let reports = summarise(conf, samples)?;
    emit(conf, &reports, out)
}

fn run_file<R: BufRead, W: Write, N: Write>(
    args: &FileArgs,
    conf: &StatConf,
    input: &mut R,
    out: &mut W,
    notes: &mut N,
) -> RunResult<()> {
    let mut chat = notes_sink(conf, out, notes);
    writeln!(chat, "=== Analysis of data from a file (CSV/Excel) ===")
        .to_run_err(RunReason::Io, "write failed")?;
    let table = DataTable::load(&args.path)
        .to_run_err(RunReason::Input, "could not read the data")?;
    writeln!(chat, "\nFile received: {}\n", args.path.display())
        .to_run_err(RunReason::Io, "write failed")?;
    write!(chat, "{}", render_preview(&table, args.preview_rows))
        .to_run_err(RunReason::Io, "write failed")?;

    let mut samples = Vec::with_capacity(conf.variables().len());
    for (idx, var) in conf.variables().iter().enumerate() {
        let column = column_for(args, var, idx, input, &mut chat)?;
        let values = table
            .numeric_column(&column)
            .to_run_err(RunReason::Input, &format!("cannot use column for {}", var.name))?;
        log::info!("{}: {} values from column '{}'", var.name, values.len(), column);
        samples.push((var.name.clone(), values));
    }
    let reports = summarise(conf, samples)?;
    emit(conf, &reports, out)
}

// --column by position, then the configured column, then ask.
fn column_for<R: BufRead, W: Write>(
    args: &FileArgs,
    var: &VariableConf,
    idx: usize,
    input: &mut R,
    out: &mut W,
) -> RunResult<String> {
    if let Some(column) = args.columns.get(idx).or(var.column.as_ref()) {
        return Ok(column.clone());
    }
    prompt_line(
        input,
        out,
        &format!("\nType exactly the name of the column for {}:", var.name),
    )
    .to_run_err(RunReason::Input, "cannot read column name")
}

fn run_walkthrough<W: Write>(args: &WalkthroughArgs, out: &mut W) -> RunResult<()> {
    let values = if args.values.is_empty() {
        DEFAULT_WALKTHROUGH.to_vec()
    } else {
        parse_number_line(&args.values.join(" "))
            .to_run_err(RunReason::Input, "cannot read walkthrough values")?
    };
    let sample = Sample::new(values).to_run_err(RunReason::Stat, "cannot walk through")?;
    write!(out, "{}", Walkthrough::new(&sample)).to_run_err(RunReason::Io, "write failed")
}

fn summarise(
    conf: &StatConf,
    samples: Vec<(String, Vec<f64>)>,
) -> RunResult<Vec<(String, SummaryReport)>> {
    let policy = conf.stats().mode_policy;
    samples
        .into_iter()
        .map(|(name, values)| -> RunResult<(String, SummaryReport)> {
            let sample = Sample::new(values)
                .to_run_err(RunReason::Stat, &format!("cannot summarise {}", name))?;
            Ok((name, compute_with(&sample, policy)))
        })
        .collect()
}

fn emit<W: Write>(
    conf: &StatConf,
    reports: &[(String, SummaryReport)],
    out: &mut W,
) -> RunResult<()> {
    let decimals = conf.output().decimals;
    let rendered = match conf.output().format {
        OutputFormat::Text => reports
            .iter()
            .map(|(name, report)| format!("\n{}", render_text(name, report, decimals)))
            .collect::<String>(),
        OutputFormat::Table => reports
            .iter()
            .map(|(name, report)| format!("\n{}", render_table(name, report, decimals)))
            .collect::<String>(),
        OutputFormat::Json => {
            let json = render_json(reports).to_run_err(RunReason::Io, "cannot encode JSON")?;
            format!("{}\n", json)
        }
    };
    write!(out, "{}", rendered).to_run_err(RunReason::Io, "write failed")?;
    out.flush().to_run_err(RunReason::Io, "write failed")
}
