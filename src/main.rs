use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use rstruth::expr::Expr;
use rstruth::expr_io::ExprGraph;
use rstruth::input::{read_formula, read_formula_file};
use rstruth::table_io::{write_table, TableFormat};
use rstruth::truth_table::{TruthTable, TruthTableEntry, DEFAULT_MAX_IDENTIFIERS};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "FORMULA")]
    /// The formula to tabulate, e.g. "(a & b) > -c"; read from the input file or stdin if omitted
    formula: Option<String>,

    #[clap(short, long, value_parser, value_name = "FILE", conflicts_with = "formula")]
    /// Read the formula from the first line of this file
    input: Option<PathBuf>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, value_parser, default_value_t = TableFormat::Text)]
    /// Output format of the table: text or csv
    format: TableFormat,

    #[clap(long)]
    /// Print the postfix form of the formula before the table
    postfix: bool,

    #[clap(long)]
    /// Print the fully parenthesized reading of the formula before the table
    tree: bool,

    #[clap(long, value_parser, value_name = "FILE")]
    /// Write the expression tree to FILE in dot (GraphViz) format
    dot: Option<PathBuf>,

    #[clap(long, value_parser, value_name = "ENTRY")]
    /// Only print rows where the formula evaluates to ENTRY (true or false)
    filter: Option<TruthTableEntry>,

    #[clap(
        long,
        value_parser,
        value_name = "N",
        env = "RSTRUTH_MAX_VARS",
        default_value_t = DEFAULT_MAX_IDENTIFIERS
    )]
    /// Refuse formulas with more than N distinct identifiers
    max_vars: usize,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Increase logging verbosity (repeatable)
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    init_logging(args.verbose);

    let formula = if let Some(formula) = args.formula {
        formula
    } else if let Some(input) = &args.input {
        read_formula_file(input)?
    } else {
        read_formula(io::stdin().lock())?
    };

    let table = TruthTable::with_limit(&formula, args.max_vars)
        .with_context(|| format!("cannot tabulate '{formula}'"))?;

    log::debug!("identifiers: {}", table.identifiers());

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(&output_file)
            .with_context(|| format!("cannot create {}", output_file.display()))?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    if args.postfix {
        writeln!(writer, "postfix: {}", table.postfix())?;
    }

    if args.tree || args.dot.is_some() {
        let expr = Expr::from_postfix(table.postfix())?;

        if args.tree {
            writeln!(writer, "tree: {expr}")?;
        }

        if let Some(dot_file) = args.dot {
            let mut f = File::create(&dot_file)
                .with_context(|| format!("cannot create {}", dot_file.display()))?;
            ExprGraph::new(&expr).render_dot(&mut f)?;
        }
    }

    write_table(&table, &mut writer, args.format, args.filter)?;

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}
