use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fs_err::File;
use log::{info, warn};
use url::Url;

use afajy_scraping::api::{fetch_bytes, reqwest_client};
use afajy_scraping::schedule::builder::ScheduleBuilder;
use afajy_scraping::schedule::extract::HtmlScheduleTable;
use afajy_scraping::schedule::repository::{
    InMemoryScheduleRepository, ScheduleCondition, ScheduleRepository,
};
use afajy_scraping::schedule::sheet::ScheduleWorkbook;

#[derive(Parser)]
struct Opts {
    /// Schedule page published by the federation.
    #[arg(long, default_value = "http://afa11.com/asahijy/reiwa2/nittei2020.html")]
    page_url: Url,
    /// Workbook fallback, tried when the page cannot be fetched.
    #[arg(long, default_value = "http://afa11.com/asahijy/reiwa2/nittei2020.xlsx")]
    workbook_url: Url,
    /// First calendar year of the season (the season runs April through March).
    #[arg(long, default_value_t = 2020)]
    year: i32,
    /// Where to save the scraped schedule as JSON.
    json_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    let client = reqwest_client()?;
    let builder = ScheduleBuilder::new(opts.year);

    let records = match fetch_bytes(&client, opts.page_url.clone()).await {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            builder.build(HtmlScheduleTable::parse(&content))?
        }
        Err(e) => {
            warn!("Could not fetch the page, falling back to the workbook: {e}");
            let bytes = fetch_bytes(&client, opts.workbook_url.clone()).await?;
            builder.build(ScheduleWorkbook::new(bytes))?
        }
    };
    info!("Scraped {} schedule records", records.len());

    let mut repository = InMemoryScheduleRepository::default();
    repository.upsert_all(&records);
    let by_kickoff = repository.find(&ScheduleCondition::default());

    let file = BufWriter::new(File::create(&opts.json_file)?);
    serde_json::to_writer(file, &by_kickoff).context("Failed to save the schedule")?;
    println!(
        "Successfully saved {} records to {:?}.",
        by_kickoff.len(),
        opts.json_file
    );

    Ok(())
}
