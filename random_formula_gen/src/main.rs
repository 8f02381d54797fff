use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const BINARY_OPERATORS: [char; 4] = ['&', '|', '>', '='];

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "VARIABLES")]
    /// The number of distinct variables to draw from (1 to 26)
    variables: usize,

    #[clap(value_parser, value_name = "OPERATORS")]
    /// The number of binary operators in each formula
    operators: usize,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short = 'n', long, value_parser, default_value_t = 1)]
    /// The number of formulas to generate, one per line
    count: usize,

    #[clap(long, value_parser)]
    /// Seed for the random generator; a random seed is used if omitted
    seed: Option<u64>,

    #[clap(long, value_parser, default_value_t = 0.2)]
    /// Probability that an operand is negated
    negation_rate: f64,

    #[clap(long, value_parser, default_value_t = 0.3)]
    /// Probability that a left operand is parenthesized
    paren_rate: f64,
}

struct FormulaGenerator {
    rng: StdRng,
    variables: Vec<char>,
    negation_rate: f64,
    paren_rate: f64,
}

impl FormulaGenerator {
    fn variable(&mut self) -> anyhow::Result<char> {
        self.variables
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no variables to choose from"))
    }

    fn operator(&mut self) -> anyhow::Result<char> {
        BINARY_OPERATORS
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no operators to choose from"))
    }

    // factor := '-'* ( identifier | '(' term ')' )
    fn factor(&mut self, operators: usize) -> anyhow::Result<String> {
        let inner = if operators == 0 {
            self.variable()?.to_string()
        } else {
            format!("({})", self.term(operators)?)
        };

        if self.rng.gen_bool(self.negation_rate) {
            Ok(format!("-{inner}"))
        } else {
            Ok(inner)
        }
    }

    // term := factor ( binop factor )*
    fn term(&mut self, operators: usize) -> anyhow::Result<String> {
        if operators == 0 {
            return self.factor(0);
        }

        let left_operators = self.rng.gen_range(0..operators);
        let right_operators = operators - 1 - left_operators;

        let left = if self.rng.gen_bool(self.paren_rate) {
            self.factor(left_operators)?
        } else {
            self.term(left_operators)?
        };
        let op = self.operator()?;
        let right = self.factor(right_operators)?;

        Ok(format!("{left} {op} {right}"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !(1..=26).contains(&args.variables) {
        Err(anyhow::anyhow!("The number of variables must be between 1 and 26"))?
    }

    for rate in [args.negation_rate, args.paren_rate] {
        if !(0.0..=1.0).contains(&rate) {
            Err(anyhow::anyhow!("Rates must be between 0 and 1, got {rate}"))?
        }
    }

    let rng = if let Some(seed) = args.seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let mut generator = FormulaGenerator {
        rng,
        variables: ('a'..='z').take(args.variables).collect(),
        negation_rate: args.negation_rate,
        paren_rate: args.paren_rate,
    };

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    for _ in 0..args.count {
        writeln!(writer, "{}", generator.term(args.operators)?)?;
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}
