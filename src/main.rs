use clap::Parser;
use fee_report::{ReportConfig, ReportError, run};
use log::info;
use std::path::PathBuf;

/// Generates the tuition account statement PDF from a JSON record.
#[derive(Parser, Debug)]
#[command(name = "fee-report", version, about)]
struct Cli {
    /// JSON record to read
    #[arg(short, long, default_value = fee_report::config::DEFAULT_INPUT)]
    input: PathBuf,

    /// PDF file to write
    #[arg(short, long, default_value = fee_report::config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Image placed at the left of the banner
    #[arg(long, default_value = fee_report::config::DEFAULT_LOGO, conflicts_with = "no_logo")]
    logo: PathBuf,

    /// Draw the banner without a logo
    #[arg(long)]
    no_logo: bool,

    /// Report number used when the record has no `numero_informe`
    #[arg(long, default_value = fee_report::config::DEFAULT_REPORT_NUMBER, allow_hyphen_values = true)]
    report_number: String,

    /// JSON file with theme and branding overrides
    #[arg(long)]
    theme: Option<PathBuf>,
}

fn main() -> Result<(), ReportError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut builder = ReportConfig::builder()
        .with_input(cli.input)
        .with_output(cli.output)
        .with_logo((!cli.no_logo).then_some(cli.logo))
        .with_report_number(cli.report_number);
    if let Some(theme) = cli.theme {
        builder = builder.with_theme_file(theme)?;
    }

    if let Some(summary) = run(builder.build()?)? {
        info!(
            "{} page(s), {} bytes written to {}",
            summary.page_count,
            summary.byte_len,
            summary.output_path.display()
        );
    }
    Ok(())
}
