//! Subcommand implementations. Each command is one batch stage: read
//! everything it needs, transform in memory, write its output, report.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use regrev_artifact::{
    read_policy_sources, read_taxonomy_mapping, write_policy_sources, write_taxonomy_mapping,
    write_url_checks,
};
use regrev_export::{export_policy_sources, export_taxonomy_mapping};
use regrev_ingest::{
    load_url_overrides, open_source_store, read_policy_statements, read_source_documents,
    read_stage_labels, read_stage_links, read_topic_labels,
};
use regrev_load::{LoadSummary, ensure_schema, load_all, open_target_store};
use regrev_urlcheck::{UrlChecker, UrlCheckerConfig};

use crate::cli::{CheckUrlsArgs, ExportArgs, LoadArgs};
use crate::summary::{print_load_summary, print_url_check_summary};

pub fn run_export_sources(args: &ExportArgs) -> Result<()> {
    let span = info_span!("export_sources", db = %args.db.display());
    let _guard = span.enter();
    let start = Instant::now();

    let overrides = load_url_overrides(&args.url_map).context("load url overrides")?;
    let conn = open_source_store(&args.db).context("open source store")?;
    let documents = read_source_documents(&conn).context("read source documents")?;

    let records = export_policy_sources(&documents, &overrides);
    write_policy_sources(&args.output, &records).context("write policy sources artifact")?;

    info!(
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "policy source export complete"
    );
    println!(
        "Wrote {} ({} records)",
        args.output.display(),
        records.len()
    );
    Ok(())
}

pub fn run_export_taxonomy(args: &ExportArgs) -> Result<()> {
    let span = info_span!("export_taxonomy", db = %args.db.display());
    let _guard = span.enter();
    let start = Instant::now();

    let overrides = load_url_overrides(&args.url_map).context("load url overrides")?;
    let conn = open_source_store(&args.db).context("open source store")?;
    let documents = read_source_documents(&conn).context("read source documents")?;
    let statements = read_policy_statements(&conn).context("read policy statements")?;
    let stage_links = read_stage_links(&conn).context("read stage links")?;
    let topic_labels = read_topic_labels(&conn).context("read topic labels")?;
    let stage_labels = read_stage_labels(&conn).context("read stage labels")?;

    let records = export_taxonomy_mapping(
        &statements,
        &stage_links,
        &topic_labels,
        &stage_labels,
        &documents,
        &overrides,
    );
    write_taxonomy_mapping(&args.output, &records).context("write taxonomy artifact")?;

    info!(
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "taxonomy export complete"
    );
    println!(
        "Wrote {} ({} records)",
        args.output.display(),
        records.len()
    );
    Ok(())
}

pub fn run_load(args: &LoadArgs) -> Result<LoadSummary> {
    let span = info_span!("load", db = %args.db.display());
    let _guard = span.enter();

    // Both artifacts are read before the store is touched so a missing
    // file aborts without any mutation.
    let policy_rows =
        read_policy_sources(&args.policy_sources).context("read policy sources artifact")?;
    let taxonomy_rows =
        read_taxonomy_mapping(&args.taxonomy).context("read taxonomy artifact")?;

    let mut conn = open_target_store(&args.db).context("open target store")?;
    ensure_schema(&conn).context("ensure target schema")?;
    let summary = load_all(
        &mut conn,
        &policy_rows,
        &taxonomy_rows,
        !args.no_truncate_taxonomy,
    )
    .context("load artifacts into target store")?;

    print_load_summary(&summary);
    Ok(summary)
}

pub fn run_check_urls(args: &CheckUrlsArgs) -> Result<()> {
    let span = info_span!("check_urls", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = read_policy_sources(&args.input).context("read policy sources artifact")?;
    let checker = UrlChecker::new(UrlCheckerConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        delay: Duration::from_millis(args.sleep_ms),
    })
    .context("build url checker")?;

    let report = checker.check_records(&rows);
    write_url_checks(&args.output, &report).context("write url check report")?;

    info!(
        probes = report.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "url check complete"
    );
    println!("Wrote {} ({} probes)", args.output.display(), report.len());
    print_url_check_summary(&report);
    Ok(())
}
