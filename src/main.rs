use std::error::Error;
use std::io::{
    self,
    BufWriter,
    Write
};
use std::path::PathBuf;
use std::process;

use clap::{
    Parser,
    ValueEnum
};

use radialdist::configuration::Configuration;
use radialdist::math::integration::integrationrule::IntegrationRule;
use radialdist::rdf::rdfnormalizer::NormalizationResult;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Scale so the area under the RDF is 1
    Area,
    /// Scale so the RDF peak is 1
    Height
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json
}

#[derive(Parser, Debug)]
#[command(
    name = "radialdist",
    about = "Normalized radial distribution function of a radial wavefunction"
)]
struct Cli {
    /// JSON configuration with domain, integration settings and wavefunctions
    #[arg(long)]
    config: PathBuf,

    /// Name of the wavefunction to evaluate
    #[arg(long, required_unless_present = "list")]
    wavefunction: Option<String>,

    #[arg(long, value_enum, default_value_t = Mode::Area)]
    mode: Mode,

    /// Override the configured rule ("mid" or "trap")
    #[arg(long)]
    rule: Option<IntegrationRule>,

    /// Override the configured convergence threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Override the initial interval count (area) or the interval count (height)
    #[arg(long)]
    intervals: Option<usize>,

    /// List the configured wavefunctions and exit
    #[arg(long)]
    list: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat
}

fn write_csv<W: Write>(out: &mut W, result: &NormalizationResult) -> io::Result<()> {
    writeln!(out, "# scale_factor={:.12e}, intervals={}", result.scale_factor(), result.intervals())?;
    writeln!(out, "x,y")?;
    for (x, y) in result.x_values().iter().zip(result.y_values()) {
        writeln!(out, "{},{}", x, y)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Configuration::from_file(&cli.config)?;

    if cli.list {
        for name in config.wavefunction_manager().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let name = cli.wavefunction.as_deref().ok_or("--wavefunction is required")?;
    let normalizer = config.normalizer(name)?;
    let result = match cli.mode {
        Mode::Area => {
            let mut settings = *config.integration();
            if let Some(rule) = cli.rule {
                settings.rule = rule;
            }
            if let Some(threshold) = cli.threshold {
                settings.convergence_threshold = threshold;
            }
            if let Some(intervals) = cli.intervals {
                settings.initial_intervals = intervals;
            }
            normalizer.normalize_area_with(&settings)?
        },
        Mode::Height => {
            let intervals = cli.intervals.unwrap_or(config.height_intervals());
            normalizer.normalize_height(intervals)?
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        OutputFormat::Csv => write_csv(&mut out, &result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
