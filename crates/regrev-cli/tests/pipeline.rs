//! End-to-end pipeline tests: seed a source store, export both artifacts,
//! load them into a fresh target store, and check the URL report path.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

use regrev_artifact::{read_policy_sources, read_taxonomy_mapping, write_policy_sources};
use regrev_cli::cli::{CheckUrlsArgs, ExportArgs, LoadArgs};
use regrev_cli::commands::{run_check_urls, run_export_sources, run_export_taxonomy, run_load};
use regrev_model::PolicySourceRecord;

fn seed_source_store(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE source_documents (
             id TEXT PRIMARY KEY, document_type TEXT, official_name TEXT,
             short_name TEXT, version TEXT, source_url TEXT, env_url TEXT
         );
         CREATE TABLE policy_statements (
             id TEXT PRIMARY KEY, topic_category TEXT, sub_category TEXT,
             source_document_id TEXT
         );
         CREATE TABLE policy_statement_lifecycle_stages (
             policy_statement_id TEXT, lifecycle_stage TEXT
         );
         CREATE TABLE topic_categories (category TEXT, description TEXT);
         CREATE TABLE lifecycle_stages (stage TEXT, description TEXT);
         INSERT INTO source_documents VALUES
             ('CSAP_001', NULL, 'Society Guidance', NULL, NULL, NULL, NULL),
             ('EPA_012', 'PROTOCOL', 'Protocol 12 for Contaminated Sites',
              NULL, 'v3', 'https://example.org/p12', NULL),
             ('EXT_200', NULL, 'Out-of-province Guidance', 'PIRI Guidance',
              NULL, NULL, NULL);
         INSERT INTO policy_statements VALUES
             ('REQ_A', 'SOIL', 'Vapour', 'EPA_012'),
             ('REQ_B', 'WATER', NULL, NULL);
         INSERT INTO policy_statement_lifecycle_stages VALUES
             ('REQ_A', 's1'), ('REQ_A', 's2');
         INSERT INTO topic_categories VALUES
             ('SOIL', 'Soil Standards'), ('WATER', 'Water Standards');
         INSERT INTO lifecycle_stages VALUES
             ('s1', 'Investigation'), ('s2', 'Remediation');",
    )
    .unwrap();
}

struct Fixture {
    _dir: TempDir,
    source_db: PathBuf,
    url_map: PathBuf,
    out_dir: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let source_db = dir.path().join("source.db");
    seed_source_store(&source_db);
    let url_map = dir.path().join("overrides.json");
    std::fs::write(
        &url_map,
        r#"{"EPA_012": {"citation_label": "Protocol Twelve", "last_updated": "2024-06-01"}}"#,
    )
    .unwrap();
    let out_dir = dir.path().join("out");
    Fixture {
        _dir: dir,
        source_db,
        url_map,
        out_dir,
    }
}

fn export_args(fixture: &Fixture, file_name: &str) -> ExportArgs {
    ExportArgs {
        db: fixture.source_db.clone(),
        url_map: fixture.url_map.clone(),
        output: fixture.out_dir.join(file_name),
    }
}

#[test]
fn export_sources_applies_rules_and_overrides() {
    let fixture = fixture();
    let args = export_args(&fixture, "policy_sources.csv");
    run_export_sources(&args).unwrap();

    let records = read_policy_sources(&args.output).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.source_id.as_str()).collect();
    assert_eq!(ids, vec!["CSAP_001", "EPA_012", "EXT_200"]);

    let csap = &records[0];
    assert_eq!(csap.issuing_body, "CSAP Society");
    assert_eq!(csap.jurisdiction, "BC");
    assert_eq!(csap.citation_label, "CSAP_001");

    let epa = &records[1];
    assert_eq!(epa.issuing_body, "BC Government");
    assert_eq!(epa.citation_label, "Protocol Twelve");
    assert_eq!(epa.last_updated, "2024-06-01");
    assert_eq!(epa.landing_page_url, "https://example.org/p12");

    let ext = &records[2];
    assert_eq!(ext.issuing_body, "Atlantic PIRI");
    assert_eq!(ext.jurisdiction, "Atlantic");
    assert_eq!(ext.citation_label, "PIRI Guidance");
}

#[test]
fn export_sources_twice_is_byte_identical() {
    let fixture = fixture();
    let first = export_args(&fixture, "first.csv");
    let second = export_args(&fixture, "second.csv");
    run_export_sources(&first).unwrap();
    run_export_sources(&second).unwrap();
    let first_bytes = std::fs::read(&first.output).unwrap();
    let second_bytes = std::fs::read(&second.output).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn export_taxonomy_fans_out_stages() {
    let fixture = fixture();
    let args = export_args(&fixture, "taxonomy_mapping.csv");
    run_export_taxonomy(&args).unwrap();

    let records = read_taxonomy_mapping(&args.output).unwrap();
    let pairs: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.internal_requirement_id.as_str(), r.stage_id.as_str()))
        .collect();
    assert_eq!(pairs, vec![("REQ_A", "s1"), ("REQ_A", "s2"), ("REQ_B", "")]);
    assert_eq!(records[0].stage_label, "Investigation");
    assert_eq!(records[0].citation_label, "Protocol Twelve");
    assert_eq!(records[0].code, "EPA_012");
    assert_eq!(records[2].topic_label, "Water Standards");
    assert_eq!(records[2].citation_label, "");
}

#[test]
fn load_upserts_and_rebuilds() {
    let fixture = fixture();
    let sources = export_args(&fixture, "policy_sources.csv");
    let taxonomy = export_args(&fixture, "taxonomy_mapping.csv");
    run_export_sources(&sources).unwrap();
    run_export_taxonomy(&taxonomy).unwrap();

    let target_db = fixture.out_dir.join("target.db");
    Connection::open(&target_db).unwrap();

    let load_args = LoadArgs {
        db: target_db.clone(),
        policy_sources: sources.output.clone(),
        taxonomy: taxonomy.output.clone(),
        no_truncate_taxonomy: false,
    };
    let first = run_load(&load_args).unwrap();
    assert_eq!(first.policy_sources, 3);
    assert_eq!(first.taxonomy_rows, 3);

    // Second load overwrites by key and rebuilds the taxonomy table.
    run_load(&load_args).unwrap();
    let conn = Connection::open(&target_db).unwrap();
    let policy_count: i64 = conn
        .query_row("SELECT count(*) FROM policy_sources", [], |row| row.get(0))
        .unwrap();
    let taxonomy_count: i64 = conn
        .query_row("SELECT count(*) FROM taxonomy_mapping", [], |row| row.get(0))
        .unwrap();
    assert_eq!(policy_count, 3);
    assert_eq!(taxonomy_count, 3);

    let citation: String = conn
        .query_row(
            "SELECT citation_label FROM policy_sources WHERE source_id = 'EPA_012'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(citation, "Protocol Twelve");
}

#[test]
fn load_with_missing_artifact_fails_before_mutation() {
    let fixture = fixture();
    let target_db = fixture.out_dir.join("target.db");
    std::fs::create_dir_all(&fixture.out_dir).unwrap();
    Connection::open(&target_db).unwrap();

    let load_args = LoadArgs {
        db: target_db.clone(),
        policy_sources: fixture.out_dir.join("missing.csv"),
        taxonomy: fixture.out_dir.join("also_missing.csv"),
        no_truncate_taxonomy: false,
    };
    let error = run_load(&load_args).unwrap_err();
    assert!(error.to_string().contains("policy sources"), "{error:#}");

    // No tables were created or written.
    let conn = Connection::open(&target_db).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT count(*) FROM sqlite_master WHERE name = 'policy_sources'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}

#[test]
fn check_urls_records_blank_urls_without_probing() {
    let fixture = fixture();
    std::fs::create_dir_all(&fixture.out_dir).unwrap();
    let input = fixture.out_dir.join("policy_sources.csv");
    write_policy_sources(
        &input,
        &[PolicySourceRecord {
            source_id: "EPA_012".to_string(),
            title: "Protocol 12".to_string(),
            ..PolicySourceRecord::default()
        }],
    )
    .unwrap();

    let args = CheckUrlsArgs {
        input,
        output: fixture.out_dir.join("url_checks.csv"),
        timeout_secs: 1,
        sleep_ms: 0,
    };
    run_check_urls(&args).unwrap();

    let report = std::fs::read_to_string(&args.output).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next().unwrap(),
        "source_id,url_type,url,status,final_url,error"
    );
    assert_eq!(lines.next().unwrap(), "EPA_012,document_url,,,,EMPTY");
    assert_eq!(lines.next().unwrap(), "EPA_012,landing_page_url,,,,EMPTY");
}
