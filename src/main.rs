// ==========================================
// Guild Assign - CLI entry point
// ==========================================
// Stack: Rust + SQLite
// Positioning: decision support - proposals are printed, never pushed
// anywhere automatically.
// ==========================================

use anyhow::{anyhow, bail, Context, Result};
use guild_assign::api::{AssignApi, RosterApi};
use guild_assign::config::ConfigManager;
use guild_assign::db::{self, open_sqlite_connection};
use guild_assign::domain::MissionOutcome;
use guild_assign::importer::{AliasImporter, ImportReport, RequirementImporter, RosterImporter};
use guild_assign::repository::{
    initialize_schema, AliasRepository, RequirementRepository, RosterRepository,
};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const DEFAULT_GUILD_ID: i64 = 1;

fn main() -> Result<()> {
    guild_assign::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - guild event staffing assistant", guild_assign::APP_NAME);
    tracing::info!("version: {}", guild_assign::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    let db_path = resolve_db_path()?;
    tracing::info!("using database: {}", db_path.display());

    match command.as_str() {
        "init" => cmd_init(&db_path),
        "import-roster" => cmd_import_roster(&db_path, &args[1..]),
        "import-aliases" => cmd_import_aliases(&db_path, &args[1..]),
        "import-requirements" => cmd_import_requirements(&db_path, &args[1..]),
        "requirements" | "req" => cmd_requirements(&db_path, &args[1..]),
        "search" => cmd_search(&db_path, &args[1..]),
        "assign" => cmd_assign(&db_path, &args[1..]),
        "assign-mission" => cmd_assign_mission(&db_path, &args[1..]),
        "backup" => cmd_backup(&db_path),
        "restore" => cmd_restore(&db_path),
        other => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}

fn print_usage() {
    println!("{} {}", guild_assign::APP_NAME, guild_assign::VERSION);
    println!();
    println!("Usage: guild-assign <command> [args]");
    println!();
    println!("Commands:");
    println!("  init                                create the database schema");
    println!("  import-roster <file.csv> [guild]    replace a guild's roster snapshot");
    println!("  import-aliases <file.csv>           load display-name aliases");
    println!("  import-requirements <file.csv>      load demand records");
    println!("  requirements <day>                  list demand records of a day");
    println!("  search <target> <criterion> [guild] list holders, e.g. search 'black bolt' g16");
    println!("  assign <day> [guild]                day-wide allocation (partial allowed)");
    println!("  assign-mission <day> <mission> [guild]  strict mission allocation");
    println!("  backup                              copy the database to its rolling backup");
    println!("  restore                             restore the database from the backup");
    println!();
    println!("Environment:");
    println!("  GUILD_ASSIGN_DB    database file path override");
    println!("  RUST_LOG           log filter (default: info)");
}

/// Database path: env override first, platform data dir otherwise.
fn resolve_db_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("GUILD_ASSIGN_DB") {
        return Ok(PathBuf::from(path));
    }

    let path = db::default_db_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create data directory {}", parent.display()))?;
    }
    Ok(path)
}

fn open_shared_connection(db_path: &Path) -> Result<Arc<Mutex<Connection>>> {
    let conn = open_sqlite_connection(&db_path.to_string_lossy())
        .with_context(|| format!("cannot open database {}", db_path.display()))?;
    initialize_schema(&conn).map_err(|e| anyhow!(e.to_string()))?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn build_assign_api(conn: &Arc<Mutex<Connection>>) -> Result<AssignApi> {
    let config_manager =
        ConfigManager::from_connection(conn.clone()).map_err(|e| anyhow!(e.to_string()))?;

    Ok(AssignApi::new(
        Arc::new(RosterRepository::from_connection(conn.clone())),
        Arc::new(AliasRepository::from_connection(conn.clone())),
        Arc::new(RequirementRepository::from_connection(conn.clone())),
        Arc::new(config_manager),
    ))
}

fn build_roster_api(conn: &Arc<Mutex<Connection>>) -> RosterApi {
    RosterApi::new(
        Arc::new(RosterRepository::from_connection(conn.clone())),
        Arc::new(AliasRepository::from_connection(conn.clone())),
        Arc::new(RequirementRepository::from_connection(conn.clone())),
    )
}

fn parse_i32(value: Option<&String>, what: &str) -> Result<i32> {
    value
        .ok_or_else(|| anyhow!("missing {}", what))?
        .parse::<i32>()
        .with_context(|| format!("{} must be a number", what))
}

fn parse_guild(value: Option<&String>) -> Result<i64> {
    match value {
        Some(v) => v.parse::<i64>().context("guild id must be a number"),
        None => Ok(DEFAULT_GUILD_ID),
    }
}

fn print_import_report(report: &ImportReport) {
    println!(
        "{}: {} rows, {} imported, {} skipped",
        report.source_file,
        report.total_rows,
        report.imported,
        report.skipped.len()
    );
    for row in &report.skipped {
        println!("  row {}: {}", row.row_no, row.reason);
    }
}

// ==========================================
// Commands
// ==========================================

fn cmd_init(db_path: &Path) -> Result<()> {
    let _conn = open_shared_connection(db_path)?;
    println!("database initialized at {}", db_path.display());
    Ok(())
}

fn cmd_import_roster(db_path: &Path, args: &[String]) -> Result<()> {
    let file = args.first().ok_or_else(|| anyhow!("missing roster file"))?;
    let guild_id = parse_guild(args.get(1))?;

    let (members, report) = RosterImporter::new().parse(Path::new(file), guild_id)?;

    let conn = open_shared_connection(db_path)?;
    let repo = RosterRepository::from_connection(conn);
    let inserted = repo.replace_guild_roster(guild_id, &members)?;

    print_import_report(&report);
    println!("roster of guild {} replaced: {} rows", guild_id, inserted);
    Ok(())
}

fn cmd_import_aliases(db_path: &Path, args: &[String]) -> Result<()> {
    let file = args.first().ok_or_else(|| anyhow!("missing alias file"))?;

    let (entries, report) = AliasImporter::new().parse(Path::new(file))?;

    let conn = open_shared_connection(db_path)?;
    let repo = AliasRepository::from_connection(conn);
    let stored = repo.upsert_many(&entries)?;

    print_import_report(&report);
    println!("{} alias mappings stored", stored);
    Ok(())
}

fn cmd_import_requirements(db_path: &Path, args: &[String]) -> Result<()> {
    let file = args
        .first()
        .ok_or_else(|| anyhow!("missing requirement file"))?;

    let (requirements, report) = RequirementImporter::new().parse(Path::new(file))?;

    let conn = open_shared_connection(db_path)?;
    let repo = RequirementRepository::from_connection(conn);
    let inserted = repo.insert_many(&requirements)?;

    print_import_report(&report);
    println!("{} demand records stored", inserted);
    Ok(())
}

fn cmd_requirements(db_path: &Path, args: &[String]) -> Result<()> {
    let day = parse_i32(args.first(), "day")?;

    let conn = open_shared_connection(db_path)?;
    let api = build_roster_api(&conn);
    let requirements = api.list_requirements(day)?;

    if requirements.is_empty() {
        println!("no demand records for day {}", day);
        return Ok(());
    }

    println!("day {} demand records:", day);
    for req in &requirements {
        println!(
            "  mission {}: {} {}{}",
            req.mission, req.character_name, req.kind_code, req.level
        );
    }
    Ok(())
}

fn cmd_search(db_path: &Path, args: &[String]) -> Result<()> {
    let target = args.first().ok_or_else(|| anyhow!("missing target name"))?;
    let criterion = args
        .get(1)
        .ok_or_else(|| anyhow!("missing criterion (e.g. g16, y5, r7)"))?;
    let guild_id = parse_guild(args.get(2))?;

    let conn = open_shared_connection(db_path)?;
    let api = build_roster_api(&conn);
    let holders = api.search_members(guild_id, target, criterion)?;

    if holders.is_empty() {
        println!("no holders of '{}' at {}", target, criterion);
        return Ok(());
    }

    println!("{} holders of '{}' at {}:", holders.len(), target, criterion);
    for m in &holders {
        println!(
            "  {} (power {}, g{} y{} r{})",
            m.name, m.power, m.gear_tier, m.stars, m.red_stars
        );
    }
    Ok(())
}

fn cmd_assign(db_path: &Path, args: &[String]) -> Result<()> {
    let day = parse_i32(args.first(), "day")?;
    let guild_id = parse_guild(args.get(1))?;

    let conn = open_shared_connection(db_path)?;
    let api = build_assign_api(&conn)?;
    let result = api.assign_day(guild_id, day)?;

    println!("run {} - day {} assignments:", result.run_id, result.day);
    for view in api.mission_views(&result) {
        println!("mission {}:", view.mission);
        for character in &view.characters {
            println!(
                "  {}: {}",
                character.character_name,
                character.members.join(", ")
            );
        }
    }

    if !result.diagnostics.is_empty() {
        println!();
        println!("unfilled requirements:");
        for diag in &result.diagnostics {
            println!(
                "  mission {} {}: {}",
                diag.mission, diag.character_name, diag.detail
            );
        }
    }
    Ok(())
}

fn cmd_assign_mission(db_path: &Path, args: &[String]) -> Result<()> {
    let day = parse_i32(args.first(), "day")?;
    let mission = parse_i32(args.get(1), "mission")?;
    let guild_id = parse_guild(args.get(2))?;

    let conn = open_shared_connection(db_path)?;
    let api = build_assign_api(&conn)?;
    let result = api.assign_mission(guild_id, day, mission)?;

    println!(
        "run {} - day {} mission {}:",
        result.run_id, result.day, result.mission
    );
    match &result.outcome {
        MissionOutcome::Fulfilled { slots } => {
            for slot in slots {
                println!("  {}: {}", slot.character_name, slot.member_name);
            }
        }
        MissionOutcome::Aborted { failure } => {
            println!("  ABORTED: {} - {}", failure.character_name, failure.detail);
        }
    }

    if !result.diagnostics.is_empty() {
        println!();
        println!("skipped requirements:");
        for diag in &result.diagnostics {
            println!("  {}: {}", diag.character_name, diag.detail);
        }
    }
    Ok(())
}

fn cmd_backup(db_path: &Path) -> Result<()> {
    let backup_path = db::backup_database(db_path)
        .with_context(|| format!("backup of {} failed", db_path.display()))?;
    println!("backup written to {}", backup_path.display());
    Ok(())
}

fn cmd_restore(db_path: &Path) -> Result<()> {
    db::restore_database(db_path)
        .with_context(|| format!("restore of {} failed", db_path.display()))?;
    println!("database restored from backup");
    Ok(())
}
