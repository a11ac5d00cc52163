use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use mbox_customers::config::Config;
use mbox_customers::csv_export::{self, ExportOutcome};
use mbox_customers::extract_from_mbox;

#[derive(Parser)]
#[command(name = "mbox-customers")]
#[command(about = "Extract e-Transfer payments and contact-form customers from an mbox archive into a CSV")]
#[command(version = "0.1.0")]
struct Args {
    /// Mbox archive to read (default: MBOX_PATH)
    mbox: Option<String>,

    /// Output CSV file (default: OUTPUT_CSV or customers_for_quickbooks.csv)
    #[arg(short, long)]
    output: Option<String>,

    /// Contact-form subject substring, repeat for several (default: CONTACT_FORM_SUBJECTS)
    #[arg(short = 's', long = "contact-subject")]
    contact_subjects: Vec<String>,

    /// Dry-run mode: print the rows instead of writing the CSV file
    #[arg(short, long)]
    dry_run: bool,

    /// Check the configuration and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    // Load the .env file when there is one
    dotenv::dotenv().ok();

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = Config::with_cli_subjects(&args.contact_subjects)?;
    if let Some(mbox) = args.mbox {
        config.mbox_path = Some(mbox);
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }

    if args.check_config {
        println!("✅ Configuration is valid");
        println!("📥 Mbox: {}", config.mbox_path.as_deref().unwrap_or("(not set)"));
        println!("📄 CSV: {}", config.output_path);
        println!("📝 Contact form subjects:");
        for subject in &config.contact_form_subjects {
            println!("   - {}", subject);
        }
        return Ok(());
    }

    let mbox_path = config
        .mbox_path
        .clone()
        .context("No mbox archive given: pass it as argument or set MBOX_PATH")?;

    info!("🚀 Extracting customer data from {}", mbox_path);
    let extraction = extract_from_mbox(&mbox_path, &config.contact_form_subjects)
        .with_context(|| format!("Unable to read mailbox {}", mbox_path))?;

    if args.dry_run {
        println!("\n{}", "=".repeat(80));
        println!("🧪 DRY-RUN - {} row(s)", extraction.records.len());
        println!("{}", "=".repeat(80));
        if extraction.records.is_empty() {
            println!("No valid data was found in the MBOX file.");
        } else {
            csv_export::write_to(std::io::stdout().lock(), &extraction.records)
                .context("Unable to print rows")?;
        }
        return Ok(());
    }

    match csv_export::write_records(&config.output_path, &extraction.records) {
        Ok(ExportOutcome::Written { path, rows }) => {
            info!("✅ {} unique record(s) exported", rows);
            println!("Data successfully extracted to {}", path.display());
        }
        Ok(ExportOutcome::NoData) => {
            println!("No valid data was found in the MBOX file.");
        }
        Err(e) => {
            error!("❌ Error writing {}: {}", config.output_path, e);
            return Err(e.into());
        }
    }

    Ok(())
}
