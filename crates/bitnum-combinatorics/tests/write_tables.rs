use std::fs;

use bitnum_combinatorics::{write_all_tables, TableError, TableKind};

#[test]
fn writes_all_four_tables() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_all_tables(dir.path(), 3).unwrap();

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["Partition.txt", "Stirling1.txt", "Stirling2.txt", "Factorials.txt"]
    );

    let partition = fs::read_to_string(dir.path().join("Partition.txt")).unwrap();
    assert_eq!(partition, "1 1 1\n1 2 2\n1 2 3\n");

    let stirling1 = fs::read_to_string(dir.path().join("Stirling1.txt")).unwrap();
    assert_eq!(stirling1, "1 -1 2\n0 1 -3\n0 0 1\n");

    let stirling2 = fs::read_to_string(dir.path().join("Stirling2.txt")).unwrap();
    assert_eq!(stirling2, "1 1 1\n0 1 3\n0 0 1\n");

    let factorials = fs::read_to_string(dir.path().join("Factorials.txt")).unwrap();
    assert_eq!(factorials, "1\n2\n6\n");
}

#[test]
fn creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("tables");
    let paths = write_all_tables(&nested, 1).unwrap();
    assert_eq!(paths.len(), TableKind::ALL.len());
    for path in paths {
        assert_eq!(fs::read_to_string(path).unwrap(), "1\n");
    }
}

#[test]
fn reports_unwritable_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = write_all_tables(&blocker, 2).unwrap_err();
    assert!(matches!(err, TableError::CreateDir { .. }), "{err:?}");
    assert!(err.to_string().contains("blocker"));
}

#[test]
fn large_tables_exceed_native_width() {
    let dir = tempfile::tempdir().unwrap();
    write_all_tables(dir.path(), 25).unwrap();

    let factorials = fs::read_to_string(dir.path().join("Factorials.txt")).unwrap();
    assert_eq!(
        factorials.lines().last(),
        Some("15511210043330985984000000")
    );
}
