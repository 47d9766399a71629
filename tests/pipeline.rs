//! End-to-end runs of the documentation pipeline.
//!
//! Most tests drive the orchestrator against an in-memory provider with
//! injectable faults; the last one builds a small catalog on disk.

use axdoc::catalog::{
    Category, CategorySet, FileSystemProvider, MetadataProvider, ObjectKind, Partition, Record,
    all_categories,
};
use axdoc::config::ExtractOptions;
use axdoc::error::{AxDocError, Result};
use axdoc::extract::{Orchestrator, RunReport, aggregate_names};
use axdoc::report::OutputSink;
use chrono::{DateTime, TimeZone as _, Utc};
use serde_json::json;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Default)]
struct FakeProvider {
    listings: BTreeMap<(ObjectKind, String), Vec<String>>,
    records: BTreeMap<(ObjectKind, String), Record>,
    broken_partitions: BTreeSet<String>,
    broken_objects: BTreeSet<String>,
}

impl FakeProvider {
    fn list(mut self, kind: ObjectKind, partition: &str, names: &[&str]) -> Self {
        self.listings.insert(
            (kind, partition.to_owned()),
            names.iter().map(|n| (*n).to_owned()).collect(),
        );
        self
    }

    fn record(mut self, kind: ObjectKind, name: &str, record: Record) -> Self {
        self.records.insert((kind, name.to_owned()), record);
        self
    }

    fn fail_partition(mut self, partition: &str) -> Self {
        self.broken_partitions.insert(partition.to_owned());
        self
    }

    fn fail_object(mut self, name: &str) -> Self {
        self.broken_objects.insert(name.to_owned());
        self
    }
}

impl MetadataProvider for FakeProvider {
    fn list_identifiers(&self, kind: ObjectKind, partition: &Partition) -> Result<Vec<String>> {
        if self.broken_partitions.contains(&partition.name) {
            return Err(AxDocError::provider(format!("{} is unreadable", partition.name)));
        }
        Ok(self
            .listings
            .get(&(kind, partition.name.clone()))
            .cloned()
            .unwrap_or_default())
    }

    fn read_object(&self, kind: ObjectKind, name: &str) -> Result<Option<Record>> {
        if self.broken_objects.contains(name) {
            return Err(AxDocError::provider(format!("{name} is corrupt")));
        }
        Ok(self.records.get(&(kind, name.to_owned())).cloned())
    }
}

fn partitions(names: &[&str]) -> Vec<Partition> {
    names
        .iter()
        .map(|n| Partition::new(*n, "Pkg", PathBuf::from(n)))
        .collect()
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

fn run(
    provider: &FakeProvider,
    partitions: &[Partition],
    enabled: &CategorySet,
) -> (RunReport<Vec<u8>>, String) {
    let options = ExtractOptions::default();
    let report = Orchestrator::new(provider, partitions, &options)
        .run_at(enabled, OutputSink::new(Vec::new()), fixed_time())
        .unwrap();
    let text = String::from_utf8(report.writer.clone()).unwrap();
    (report, text)
}

fn only(category: Category) -> CategorySet {
    [category].into_iter().collect()
}

#[test]
fn test_enum_run_skips_unreadable_object() {
    let provider = FakeProvider::default()
        .list(ObjectKind::Enum, "ModA", &["EnumFoo", "EnumBar"])
        .list(ObjectKind::Enum, "ModB", &["EnumBar"])
        .record(
            ObjectKind::Enum,
            "EnumFoo",
            json!({
                "Label": "Foo",
                "EnumValues": [
                    { "Name": "First", "Value": 0 },
                    { "Name": "Second", "Value": 1 },
                ]
            }),
        )
        .fail_object("EnumBar");
    let parts = partitions(&["ModA", "ModB"]);

    let (report, text) = run(&provider, &parts, &only(Category::Enums));

    let count = report.tally.get("Enums");
    assert_eq!(count.documented, 1, "EnumFoo documented");
    assert_eq!(count.skipped, 1, "EnumBar skipped");

    assert!(text.starts_with("# Metadata Documentation"));
    assert!(text.contains("## Enums\n\nTotal: 2\n\n"));
    assert!(text.contains("### EnumFoo"));
    assert!(!text.contains("### EnumBar"), "failed object leaves no block");
    assert!(text.contains("| 0 | First |\n| 1 | Second |\n"));
}

#[test]
fn test_run_is_deterministic() {
    let provider = FakeProvider::default()
        .list(ObjectKind::Enum, "ModA", &["NoYes"])
        .list(ObjectKind::Table, "ModA", &["CustTable"])
        .record(ObjectKind::Enum, "NoYes", json!({ "EnumValues": [{ "Name": "No" }] }))
        .record(ObjectKind::Table, "CustTable", json!({ "Label": "Customers" }));
    let parts = partitions(&["ModA"]);

    let (_, first) = run(&provider, &parts, &all_categories());
    let (_, second) = run(&provider, &parts, &all_categories());
    assert_eq!(first, second);
}

#[test]
fn test_middle_object_fault_is_isolated() {
    let provider = FakeProvider::default()
        .list(ObjectKind::Map, "ModA", &["x", "y", "z"])
        .record(ObjectKind::Map, "x", json!({}))
        .record(ObjectKind::Map, "z", json!({}))
        .fail_object("y");
    let parts = partitions(&["ModA"]);

    let (report, text) = run(&provider, &parts, &only(Category::Maps));

    let count = report.tally.get("Maps");
    assert_eq!((count.documented, count.skipped), (2, 1));
    let x = text.find("### x").unwrap();
    let z = text.find("### z").unwrap();
    assert!(x < z, "surviving blocks keep aggregate order");
    assert!(!text.contains("### y"));
}

#[test]
fn test_missing_object_counts_as_skipped() {
    let provider = FakeProvider::default().list(ObjectKind::Query, "ModA", &["Ghost"]);
    let parts = partitions(&["ModA"]);

    let (report, text) = run(&provider, &parts, &only(Category::Queries));

    assert_eq!(report.tally.get("Queries").skipped, 1);
    assert!(text.contains("## Queries\n\nTotal: 1\n\n"));
}

#[test]
fn test_partition_listing_fault_is_excluded() {
    let provider = FakeProvider::default()
        .list(ObjectKind::Enum, "ModA", &["A"])
        .list(ObjectKind::Enum, "ModC", &["C"])
        .fail_partition("ModB");
    let parts = partitions(&["ModA", "ModB", "ModC"]);

    let names = aggregate_names(&parts, |p| provider.list_identifiers(ObjectKind::Enum, p));
    assert_eq!(names, vec!["A".to_owned(), "C".to_owned()]);
}

#[test]
fn test_sections_follow_category_order() {
    let provider = FakeProvider::default();
    let parts = partitions(&["ModA"]);

    let reversed: CategorySet = [Category::Maps, Category::Tables, Category::Enums]
        .into_iter()
        .collect();
    let (report, text) = run(&provider, &parts, &reversed);

    assert_eq!(
        report.categories,
        vec![Category::Enums, Category::Tables, Category::Maps]
    );
    let enums = text.find("## Enums").unwrap();
    let tables = text.find("## Tables").unwrap();
    let maps = text.find("## Maps").unwrap();
    assert!(enums < tables && tables < maps);
    assert!(!text.contains("## Views"), "disabled categories are not written");
}

#[test]
fn test_empty_catalog_still_writes_headers() {
    let provider = FakeProvider::default();
    let parts = partitions(&["ModA"]);

    let (report, text) = run(&provider, &parts, &only(Category::MenuItems));

    assert!(text.contains("## Menu Items"));
    assert!(text.contains("### Display Menu Items\n\nTotal: 0\n\n"));
    assert_eq!(report.tally.total().documented, 0);
}

/// Writer that remembers how many bytes it held at each flush.
#[derive(Default)]
struct FlushLog {
    bytes: Vec<u8>,
    flushes: Vec<usize>,
}

impl Write for FlushLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.push(self.bytes.len());
        Ok(())
    }
}

#[test]
fn test_each_object_is_flushed_before_the_next() {
    let provider = FakeProvider::default()
        .list(ObjectKind::Enum, "ModA", &["EnumA", "EnumB", "EnumC"])
        .record(ObjectKind::Enum, "EnumA", json!({ "EnumValues": [{ "Name": "One" }] }))
        .record(ObjectKind::Enum, "EnumB", json!({ "EnumValues": [{ "Name": "Two" }] }))
        .record(ObjectKind::Enum, "EnumC", json!({ "EnumValues": [{ "Name": "Three" }] }));
    let parts = partitions(&["ModA"]);
    let options = ExtractOptions::default();

    let report = Orchestrator::new(&provider, &parts, &options)
        .run_at(
            &only(Category::Enums),
            OutputSink::new(FlushLog::default()),
            fixed_time(),
        )
        .unwrap();
    let log = report.writer;
    let text = String::from_utf8(log.bytes.clone()).unwrap();

    for name in ["EnumA", "EnumB", "EnumC"] {
        let start = text.find(&format!("### {name}")).unwrap();
        assert!(
            log.flushes.contains(&start),
            "output before {name} was flushed (flushes at {:?})",
            log.flushes
        );
    }
    let last_row = "| 0 | Three |\n\n";
    let after_c = text.find(last_row).unwrap() + last_row.len();
    assert!(log.flushes.contains(&after_c), "last object flushed on its own");
}

/// Writer that accepts `limit` bytes in total, then fails.
struct FullDisk {
    accepted: Rc<RefCell<Vec<u8>>>,
    limit: usize,
}

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut accepted = self.accepted.borrow_mut();
        if accepted.len() + buf.len() > self.limit {
            return Err(io::Error::other("full"));
        }
        accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_output_failure_aborts_the_run() {
    let names = ["E1", "E2", "E3", "E4", "E5"];
    let mut provider = FakeProvider::default().list(ObjectKind::Enum, "ModA", &names);
    for name in names {
        provider = provider.record(
            ObjectKind::Enum,
            name,
            json!({ "Label": "A label long enough to fill the disk quickly" }),
        );
    }
    let parts = partitions(&["ModA"]);
    let options = ExtractOptions::default();

    let accepted = Rc::new(RefCell::new(Vec::new()));
    let sink = OutputSink::new(FullDisk {
        accepted: Rc::clone(&accepted),
        limit: 160,
    });
    let result = Orchestrator::new(&provider, &parts, &options).run_at(
        &only(Category::Enums),
        sink,
        fixed_time(),
    );

    let err = result.err().unwrap().to_string();
    assert!(err.contains("full"), "unexpected error: {err}");

    let written = String::from_utf8(accepted.borrow().clone()).unwrap();
    assert!(
        written.starts_with("# Metadata Documentation"),
        "blocks flushed before the failure stay written"
    );
    assert!(!written.contains("### E5"));
}

#[test]
fn test_security_group_writes_only_enabled_kinds() {
    let provider = FakeProvider::default()
        .list(ObjectKind::SecurityRole, "ModA", &["RoleA"])
        .list(ObjectKind::SecurityDuty, "ModA", &["DutyA"])
        .list(ObjectKind::SecurityPrivilege, "ModA", &["PrivA"])
        .record(ObjectKind::SecurityRole, "RoleA", json!({ "Label": "Role" }))
        .record(ObjectKind::SecurityDuty, "DutyA", json!({ "Label": "Duty" }))
        .record(ObjectKind::SecurityPrivilege, "PrivA", json!({}));
    let parts = partitions(&["ModA"]);

    let (report, text) = run(&provider, &parts, &only(Category::SecurityDuties));

    assert!(text.contains("## Security Duties\n\nTotal: 1\n\n"));
    assert!(text.contains("- `DutyA` - Duty\n"));
    assert!(!text.contains("RoleA"));
    assert!(!text.contains("PrivA"));
    assert!(!text.contains("## Security Roles"));
    assert_eq!(report.tally.get("Security Duties").documented, 1);
    assert_eq!(report.tally.get("Security Roles").documented, 0);
}

#[test]
fn test_classes_list_everything_and_detail_prefixed_names() {
    let provider = FakeProvider::default()
        .list(ObjectKind::Class, "ModA", &["CustFoo", "SysOperationBar"])
        .list(ObjectKind::Class, "ModB", &["RunBaseBaz"])
        .record(
            ObjectKind::Class,
            "SysOperationBar",
            json!({ "Extends": "SysOperationServiceController", "Methods": [{ "Name": "run" }] }),
        )
        .record(ObjectKind::Class, "CustFoo", json!({}))
        .fail_object("RunBaseBaz");
    let parts = partitions(&["ModA", "ModB"]);

    let (report, text) = run(&provider, &parts, &only(Category::Classes));

    assert!(text.contains("## Classes\n\nTotal: 3\n\n"));
    assert!(text.contains("### Framework Classes (2)"));
    assert!(text.contains("#### SysOperationBar"));
    assert!(!text.contains("#### CustFoo"), "unprefixed classes are not read");
    assert!(text.contains("### All Classes (3)"));
    assert!(text.contains("- CustFoo\n"));
    assert!(text.contains("- RunBaseBaz\n"));

    let detailed = report.tally.get("Classes");
    assert_eq!((detailed.documented, detailed.skipped), (1, 1));
    assert_eq!(report.tally.get("Classes (listed)").documented, 3);
}

fn write_json(path: &Path, value: &Record) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

#[test]
fn test_filesystem_catalog_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("packages");
    let package = root.join("ApplicationSuite");

    write_json(&package.join("Descriptor/Foundation.json"), &json!({}));
    write_json(
        &package.join("Foundation/AxEnum/NoYes.json"),
        &json!({
            "Label": "@SYS1",
            "EnumValues": [{ "Name": "No", "Value": 0 }, { "Name": "Yes", "Value": 1 }]
        }),
    );
    write_json(
        &package.join("Foundation/AxTable/CustTable.json"),
        &json!({
            "Label": "Customers",
            "PrimaryIndex": "AccountIdx",
            "Fields": [
                { "$type": "AxTableFieldString", "Name": "AccountNum",
                  "ExtendedDataType": "CustAccount", "Mandatory": "Yes" },
                { "$type": "AxTableFieldEnum", "Name": "Blocked", "EnumType": "NoYes" }
            ],
            "Indexes": [
                { "Name": "AccountIdx", "Fields": [{ "DataField": "AccountNum" }] },
                { "Name": "BlockedIdx", "AllowDuplicates": "Yes",
                  "Fields": [{ "DataField": "Blocked" }] }
            ]
        }),
    );
    fs::write(package.join("Foundation/AxTable/Broken.json"), "{ not json").unwrap();

    let provider = FileSystemProvider::open(&root).unwrap();
    assert_eq!(provider.partitions().len(), 1);

    let output = dir.path().join("out/docs.md");
    let enabled: CategorySet = [Category::Enums, Category::Tables].into_iter().collect();
    let options = ExtractOptions::default();
    let report = Orchestrator::new(&provider, provider.partitions(), &options)
        .run_at(&enabled, OutputSink::create(&output).unwrap(), fixed_time())
        .unwrap();

    assert_eq!(report.tally.get("Enums").documented, 1);
    let tables = report.tally.get("Tables");
    assert_eq!((tables.documented, tables.skipped), (1, 1));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("> **Generated:** 2024-01-02 03:04:05 UTC"));
    assert!(text.contains("> **Models scanned:** 1"));
    assert!(text.contains("| 1 | Yes |"));
    assert!(text.contains("| AccountNum | String | CustAccount | Yes |"));
    assert!(text.contains("| Blocked | Enum (NoYes) | NoYes |  |"));
    assert!(text.contains("| AccountIdx | Yes | AccountNum |"));
    assert!(text.contains("| BlockedIdx | No | Blocked |"));
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = FileSystemProvider::open(dir.path().join("nowhere"));
    assert!(matches!(result, Err(AxDocError::Discovery { .. })));
}
