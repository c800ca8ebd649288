// ==========================================
// Repository layer integration tests
// ==========================================
// Goal: verify persistence round-trips and query ordering against a
// real (temp) SQLite database.
// ==========================================

mod test_helpers;

use guild_assign::config::{config_keys, ConfigManager};
use guild_assign::domain::types::DemandKind;
use guild_assign::domain::AliasEntry;
use guild_assign::repository::{AliasRepository, RequirementRepository, RosterRepository};
use test_helpers::{create_test_db, member, requirement};

// ==========================================
// Roster
// ==========================================

#[test]
fn test_roster_replace_and_list_round_trip() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RosterRepository::new(&db_path).unwrap();

    let roster = vec![
        member("bob", "Medusa", 9_000, 13),
        member("alice", "BlackBolt", 12_000, 15),
        member("alice", "Medusa", 11_000, 14),
    ];
    let inserted = repo.replace_guild_roster(1, &roster).unwrap();
    assert_eq!(inserted, 3);

    let listed = repo.list_by_guild(1).unwrap();
    assert_eq!(listed.len(), 3);
    // stable (name, character_id) order
    assert_eq!(listed[0].name, "alice");
    assert_eq!(listed[0].character_id, "BlackBolt");
    assert_eq!(listed[1].character_id, "Medusa");
    assert_eq!(listed[2].name, "bob");
    assert_eq!(listed[1].power, 11_000);
}

#[test]
fn test_roster_replace_drops_previous_snapshot() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RosterRepository::new(&db_path).unwrap();

    repo.replace_guild_roster(1, &[member("old", "BlackBolt", 1, 1)])
        .unwrap();
    repo.replace_guild_roster(1, &[member("new", "BlackBolt", 2, 2)])
        .unwrap();

    let listed = repo.list_by_guild(1).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "new");
}

#[test]
fn test_roster_replace_is_guild_scoped() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RosterRepository::new(&db_path).unwrap();

    repo.replace_guild_roster(1, &[member("g1", "BlackBolt", 1, 1)])
        .unwrap();
    repo.replace_guild_roster(2, &[member("g2", "BlackBolt", 1, 1)])
        .unwrap();

    assert_eq!(repo.list_by_guild(1).unwrap().len(), 1);
    assert_eq!(repo.list_by_guild(2).unwrap().len(), 1);
    assert_eq!(repo.list_by_guild(1).unwrap()[0].name, "g1");
}

#[test]
fn test_roster_search_holders_orders_power_descending() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RosterRepository::new(&db_path).unwrap();

    repo.replace_guild_roster(
        1,
        &[
            member("weak", "BlackBolt", 5_000, 15),
            member("strong", "BlackBolt", 20_000, 15),
            member("undergeared", "BlackBolt", 30_000, 10),
            member("other", "Medusa", 40_000, 16),
        ],
    )
    .unwrap();

    let holders = repo
        .search_holders(1, "BlackBolt", DemandKind::Gear, 15)
        .unwrap();

    let names: Vec<&str> = holders.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["strong", "weak"]);
}

#[test]
fn test_roster_distinct_member_names() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RosterRepository::new(&db_path).unwrap();

    repo.replace_guild_roster(
        1,
        &[
            member("bob", "BlackBolt", 1, 1),
            member("alice", "BlackBolt", 1, 1),
            member("alice", "Medusa", 1, 1),
        ],
    )
    .unwrap();

    let names = repo.distinct_member_names(1).unwrap();
    assert_eq!(names, vec!["alice", "bob"]);
}

// ==========================================
// Aliases
// ==========================================

#[test]
fn test_alias_upsert_last_write_wins() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = AliasRepository::new(&db_path).unwrap();

    repo.upsert("bb", "WrongId").unwrap();
    repo.upsert("bb", "BlackBolt").unwrap();

    let map = repo.load_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.resolve("bb"), Some("BlackBolt"));
}

#[test]
fn test_alias_batch_upsert_and_case_insensitive_resolve() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = AliasRepository::new(&db_path).unwrap();

    let entries = vec![
        AliasEntry {
            clean_name: "black bolt".to_string(),
            character_id: "BlackBolt".to_string(),
        },
        AliasEntry {
            clean_name: "medusa".to_string(),
            character_id: "Medusa".to_string(),
        },
    ];
    assert_eq!(repo.upsert_many(&entries).unwrap(), 2);

    let map = repo.load_map().unwrap();
    assert_eq!(map.resolve("Black Bolt"), Some("BlackBolt"));
    assert_eq!(map.resolve("MEDUSA"), Some("Medusa"));
    assert_eq!(map.resolve("unknown"), None);
}

#[test]
fn test_alias_substring_search() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = AliasRepository::new(&db_path).unwrap();

    repo.upsert("black bolt", "BlackBolt").unwrap();
    repo.upsert("bb", "BlackBolt").unwrap();
    repo.upsert("medusa", "Medusa").unwrap();

    let hits = repo.search("bolt").unwrap();
    // matches on clean_name OR character_id, ordered by clean_name
    let names: Vec<&str> = hits.iter().map(|e| e.clean_name.as_str()).collect();
    assert_eq!(names, vec!["bb", "black bolt"]);
}

// ==========================================
// Requirements
// ==========================================

#[test]
fn test_requirement_insert_list_delete() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RequirementRepository::new(&db_path).unwrap();

    let records = vec![
        requirement("Medusa", 1, 2, "Y", 6),
        requirement("Black Bolt", 1, 1, "G", 15),
        requirement("Karnak", 2, 1, "R", 4),
    ];
    assert_eq!(repo.insert_many(&records).unwrap(), 3);

    let day1 = repo.list_by_day(1).unwrap();
    assert_eq!(day1.len(), 2);
    // (mission, character) order
    assert_eq!(day1[0].character_name, "Black Bolt");
    assert_eq!(day1[1].character_name, "Medusa");

    assert_eq!(repo.list_days().unwrap(), vec![1, 2]);

    assert_eq!(repo.delete_day(1).unwrap(), 2);
    assert!(repo.list_by_day(1).unwrap().is_empty());
    assert_eq!(repo.list_by_day(2).unwrap().len(), 1);
}

#[test]
fn test_requirement_mission_listing_keeps_insertion_order() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let repo = RequirementRepository::new(&db_path).unwrap();

    let records = vec![
        requirement("Zemo", 1, 1, "G", 15),
        requirement("Apocalypse", 1, 1, "G", 15),
        requirement("Medusa", 1, 2, "G", 15),
    ];
    repo.insert_many(&records).unwrap();

    let mission1 = repo.list_by_day_and_mission(1, 1).unwrap();
    let names: Vec<&str> = mission1.iter().map(|r| r.character_name.as_str()).collect();
    // insertion order, not alphabetical
    assert_eq!(names, vec!["Zemo", "Apocalypse"]);
}

// ==========================================
// Config
// ==========================================

#[test]
fn test_config_defaults_when_table_empty() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    let config = manager.allocation_config().unwrap();
    assert_eq!(config.squad_size, 5);
    assert_eq!(config.total_cap, 12);
    assert_eq!(config.mission_cap, 2);
}

#[test]
fn test_config_set_and_read_back() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    manager.set_config_value(config_keys::TOTAL_CAP, "8").unwrap();
    manager.set_config_value(config_keys::TOTAL_CAP, "9").unwrap();

    assert_eq!(manager.get_total_cap().unwrap(), 9);
    // untouched keys keep their defaults
    assert_eq!(manager.get_squad_size().unwrap(), 5);
}

#[test]
fn test_config_snapshot_round_trip() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    manager.set_config_value(config_keys::TOTAL_CAP, "7").unwrap();
    manager.set_config_value(config_keys::SQUAD_SIZE, "4").unwrap();
    let snapshot = manager.get_config_snapshot().unwrap();

    manager.set_config_value(config_keys::TOTAL_CAP, "99").unwrap();
    let restored = manager.restore_config_from_snapshot(&snapshot).unwrap();

    assert_eq!(restored, 2);
    assert_eq!(manager.get_total_cap().unwrap(), 7);
    assert_eq!(manager.get_squad_size().unwrap(), 4);
}

#[test]
fn test_config_malformed_value_falls_back_to_default() {
    let (_tmp, db_path) = create_test_db().unwrap();
    let manager = ConfigManager::new(&db_path).unwrap();

    manager
        .set_config_value(config_keys::MISSION_CAP, "not-a-number")
        .unwrap();

    assert_eq!(manager.get_mission_cap().unwrap(), 2);
}
