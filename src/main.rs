#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod model;
mod prelude;
mod quantity;
mod report;
mod store;
mod tables;

use clap::Parser;

use crate::{
    api::extraction::{BillExtractor, mime_from_path},
    cli::{Args, BillSourceArgs, Command, CompareArgs, RankArgs, ShowArgs},
    core::{
        comparison::{compare, current_breakdown, rank_offers},
        vat::VatConfig,
    },
    model::{bill::BillData, simulation::SavedSimulation},
    prelude::*,
    tables::{build_breakdown_table, build_ranking_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();

    match Args::parse().command {
        Command::Compare(args) => run_compare(*args).await,
        Command::Rank(args) => run_rank(*args).await,
        Command::Show(args) => run_show(args).await,
    }
}

async fn run_compare(args: CompareArgs) -> Result {
    let bill = load_bill(&args.bill).await?;
    let offer = args.offer.to_offer();
    let vat = VatConfig::PORTUGAL;

    let Some(comparison) = compare(&bill, &offer, &vat) else {
        warn!("the bill has no consumption, there is nothing to compare");
        return Ok(());
    };
    info!(
        current = %comparison.current.total(),
        offered = %comparison.offered.total(),
        is_cheaper = comparison.is_cheaper,
        "compared",
    );

    println!("{}", build_breakdown_table(&comparison.current, &comparison.offered));
    let rendered = report::render(&bill, &offer, &comparison);
    println!("{rendered}");

    if let Some(path) = &args.report_out {
        tokio::fs::write(path, rendered)
            .await
            .with_context(|| format!("failed to write the report to `{}`", path.display()))?;
        info!(path = %path.display(), "report written");
    }
    if let Some(path) = &args.save {
        store::save(path, &SavedSimulation::new(bill, offer)).await?;
    }
    Ok(())
}

async fn run_rank(args: RankArgs) -> Result {
    let bill = load_bill(&args.bill).await?;
    let simulations = store::load_many(&args.simulations).await?;
    let vat = VatConfig::PORTUGAL;

    let ranked = rank_offers(&bill, &simulations, &vat);
    if ranked.is_empty() {
        warn!("nothing to rank: the bill has no consumption or no simulations were given");
        return Ok(());
    }

    // Removal by original index, so re-sorted output stays addressable.
    let ranked: Vec<_> = ranked
        .into_iter()
        .filter(|offer| !args.remove.contains(&offer.original_index))
        .collect();

    let current_total = current_breakdown(&bill, &vat).total();
    println!("{}", build_ranking_table(current_total, &ranked));
    Ok(())
}

async fn run_show(args: ShowArgs) -> Result {
    let simulation = store::load(&args.path).await?;
    println!("{}", serde_json::to_string_pretty(&simulation)?);
    Ok(())
}

/// Resolves the current bill: manual fields, a saved JSON document, or a
/// PDF/image pushed through the extraction service.
async fn load_bill(args: &BillSourceArgs) -> Result<BillData> {
    let Some(path) = &args.bill else {
        return Ok(args.manual.to_bill());
    };
    let mime = mime_from_path(path)?;
    if mime == "application/json" {
        return Ok(store::load(path).await?.bill_data);
    }

    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let extractor = args.extraction.try_new_client()?;
    let bill = extractor.extract(&content, mime).await?;
    info!(
        consumption = %bill.consumption,
        contracted_power = %bill.contracted_power,
        "extracted",
    );
    Ok(bill)
}
