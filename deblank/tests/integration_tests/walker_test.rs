// tests/integration_tests/walker_test.rs
use super::common::create_test_file;
use anyhow::Result;
use deblank::find_files;
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_walker_returns_matching_set() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let src = temp_dir.path().join("src");
    let x = create_test_file(&src, "x.vue", "")?;
    create_test_file(&src, "y.txt", "")?;
    let z = create_test_file(&src, "sub/z.vue", "")?;

    let found: HashSet<PathBuf> = find_files(&src, "vue")?.into_iter().collect();
    let expected: HashSet<PathBuf> = [x, z].into_iter().collect();

    assert_eq!(
        found, expected,
        "Walker should return exactly the .vue files, any order"
    );
    Ok(())
}

#[test]
fn test_walker_is_read_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(temp_dir.path(), "dirty.vue", "a\n\nb\n")?;

    find_files(temp_dir.path(), "vue")?;

    assert_eq!(
        std::fs::read_to_string(path)?,
        "a\n\nb\n",
        "Traversal alone must not modify any file"
    );
    Ok(())
}
