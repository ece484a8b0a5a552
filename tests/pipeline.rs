//! End-to-end pipeline tests: scan a docs tree, build the sidebar from the
//! generated table, and verify the serialized output round-trips.

use sidegen::config::{Mode, SidebarConfig};
use sidegen::scan;
use sidegen::tree;
use sidegen::types::SidebarNode;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::write(path, "# stub\n").unwrap();
}

fn docs_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("guide/deploy")).unwrap();
    fs::create_dir_all(root.join("reference")).unwrap();
    touch(&root.join("index.md"));
    touch(&root.join("about.md"));
    touch(&root.join("guide/index.md"));
    touch(&root.join("guide/start.md"));
    touch(&root.join("guide/deploy/docker.md"));
    touch(&root.join("reference/cli.md"));
    tmp
}

fn group<'a>(nodes: &'a [SidebarNode], text: &str) -> &'a sidegen::types::SidebarGroup {
    nodes
        .iter()
        .find_map(|n| match n {
            SidebarNode::Group(g) if g.text == text => Some(g),
            _ => None,
        })
        .unwrap_or_else(|| panic!("group '{text}' not found"))
}

fn labels(nodes: &[SidebarNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.text()).collect()
}

#[test]
fn scan_then_build_produces_the_expected_forest() {
    let tmp = docs_fixture();
    let config = SidebarConfig::default();

    let records = scan::scan(tmp.path()).unwrap();
    let table = scan::to_table(&records, config.mode);
    let forest = tree::build_sidebar(&table, &config).unwrap();

    // Scan order is alphabetical: about.md, guide/, reference/, then the
    // root index becomes the trailing homepage entry.
    assert_eq!(labels(&forest), vec!["About", "Guide", "Reference", "Home"]);

    let guide = group(&forest, "Guide");
    assert_eq!(labels(&guide.items), vec!["Deploy", "Guide", "Start"]);
    let deploy = group(&guide.items, "Deploy");
    assert_eq!(labels(&deploy.items), vec!["Docker"]);
}

#[test]
fn table_written_to_disk_builds_identically() {
    let tmp = docs_fixture();
    let config = SidebarConfig::default();

    let records = scan::scan(tmp.path()).unwrap();
    let table = scan::to_table(&records, config.mode);

    let vp_dir = tmp.path().join(".vitepress");
    fs::create_dir_all(&vp_dir).unwrap();
    let table_path = vp_dir.join(config.mode.structure_filename());
    fs::write(&table_path, &table).unwrap();

    let from_text = tree::build_sidebar(&table, &config).unwrap();
    let from_disk = tree::build_from_path(&table_path, &config).unwrap();
    assert_eq!(from_text, from_disk);
}

#[test]
fn serialized_sidebar_round_trips_through_json() {
    let tmp = docs_fixture();
    let config = SidebarConfig::default();

    let records = scan::scan(tmp.path()).unwrap();
    let table = scan::to_table(&records, config.mode);
    let forest = tree::build_sidebar(&table, &config).unwrap();

    let json = serde_json::to_string_pretty(&forest).unwrap();
    let parsed: Vec<SidebarNode> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, forest);
}

#[test]
fn private_mode_build_from_scanned_table() {
    let tmp = docs_fixture();
    let config = SidebarConfig {
        mode: Mode::Private,
        ..SidebarConfig::default()
    };

    let records = scan::scan(tmp.path()).unwrap();
    let table = scan::to_table(&records, config.mode);
    let forest = tree::build_sidebar(&table, &config).unwrap();

    // No homepage entry in private mode; everything else is identical.
    assert_eq!(labels(&forest), vec!["About", "Guide", "Reference"]);
}

#[test]
fn public_table_rejected_in_private_mode() {
    let tmp = docs_fixture();

    let records = scan::scan(tmp.path()).unwrap();
    let public_table = scan::to_table(&records, Mode::Public);

    let private = SidebarConfig {
        mode: Mode::Private,
        ..SidebarConfig::default()
    };
    let result = tree::build_sidebar(&public_table, &private);
    assert!(matches!(
        result,
        Err(tree::BuildError::Table(
            sidegen::rows::RowError::SchemaMismatch { expected: 3, actual: 2, .. }
        ))
    ));
}
