use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analyzer::Analyzer;
use crate::browser::{normalize_url, ChromeFetcher};
use crate::cli::commands::ScanArgs;
use crate::config;
use crate::errors::PageLensError;
use crate::llm::{HostedProvider, LlmProvider, LocalProvider};
use crate::models::{AnalysisRecord, Assessment};
use crate::reporting;

pub async fn handle_scan(args: ScanArgs) -> Result<(), PageLensError> {
    let cfg = config::load_config(args.config.as_deref().map(Path::new)).await?;
    let url = normalize_url(&args.url)?;

    // Backend selection is validated before any browser launches.
    let provider: Option<Box<dyn LlmProvider>> = match args.assess.as_str() {
        "none" => None,
        "local" => Some(Box::new(LocalProvider::new(&cfg.local_llm))),
        "hosted" => Some(Box::new(HostedProvider::new(&cfg.hosted_llm)?)),
        other => {
            return Err(PageLensError::Validation(format!(
                "Unknown assessment backend '{}' (expected local, hosted, or none)",
                other
            )))
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("static template"));
    spinner.enable_steady_tick(Duration::from_millis(120));

    spinner.set_message(format!("Fetching {}", url));
    let fetcher = ChromeFetcher::new(cfg.browser.clone());
    let snapshot = fetcher.fetch(&url).await?;
    let record = AnalysisRecord::from_snapshot(&snapshot);

    let assessment: Option<Assessment> = match provider {
        Some(provider) => {
            spinner.set_message(format!("Running AI assessment ({})", provider.model_name()));
            Some(Analyzer::new(provider).assess(&record).await?)
        }
        None => None,
    };

    spinner.finish_and_clear();
    print_summary(&record, assessment.as_ref());

    if !args.no_save {
        let dir = args.output.unwrap_or_else(|| cfg.output.dir.clone());
        let (json_path, text_path) =
            reporting::write_report_files(Path::new(&dir), &record, assessment.as_ref()).await?;
        println!(
            "\nResults saved to {} and {}",
            style(json_path.display()).cyan(),
            style(text_path.display()).cyan()
        );
    }

    Ok(())
}

fn print_summary(record: &AnalysisRecord, assessment: Option<&Assessment>) {
    println!("{} {}", style("Analyzed").green().bold(), record.url);
    println!(
        "  scripts: {}  cookies: {}  trackers: {}  pii risks: {}",
        record.scripts.len(),
        record.cookies.len(),
        record.trackers.len(),
        record.pii_risks.len(),
    );

    for hit in &record.trackers {
        println!(
            "  {} [{}] {}",
            style("tracker").yellow(),
            hit.category,
            hit.source
        );
    }
    for risk in &record.pii_risks {
        let name = risk.key.as_deref().or(risk.input_name.as_deref()).unwrap_or("?");
        println!(
            "  {} {:?}: {}",
            style("pii").red().bold(),
            risk.location,
            name
        );
    }

    if let Some(assessment) = assessment {
        println!(
            "\n{} model={}",
            style("AI assessment").magenta().bold(),
            assessment.metadata.model
        );
        if let Some(score) = assessment.body["OVERALL_SECURITY_ASSESSMENT"]["risk_score"].as_i64() {
            println!("  risk score: {}/100", score);
        }
    }
}
