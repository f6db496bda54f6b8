//! Integration tests for the HostVault vault facade and record store.

use std::path::PathBuf;

use hostvault::errors::HostVaultError;
use hostvault::vault::{RecordStore, Vault};
use tempfile::TempDir;

/// Helper: a credential database path inside a fresh temp dir.
fn db_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("credentials.db");
    (dir, path)
}

// ---------------------------------------------------------------------------
// Save and fetch round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_and_fetch_roundtrip() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"master-pw").expect("open vault");

    vault
        .save("10.0.0.1", "root", "s3cret", "manager")
        .expect("save");

    let secret = vault.fetch("10.0.0.1", "root").expect("fetch");
    assert_eq!(secret.as_deref(), Some("s3cret"));
}

#[test]
fn reopen_with_same_passphrase_reads_back() {
    let (_dir, path) = db_path();

    {
        let vault = Vault::open(&path, b"persistent-pw").expect("open");
        vault.save("db.internal", "deploy", "tok_xyz", "").expect("save");
        vault.close().expect("close");
    }

    let vault = Vault::open(&path, b"persistent-pw").expect("reopen");
    let secret = vault.fetch("db.internal", "deploy").expect("fetch");
    assert_eq!(secret.as_deref(), Some("tok_xyz"));
}

// ---------------------------------------------------------------------------
// Upsert semantics
// ---------------------------------------------------------------------------

#[test]
fn save_same_pair_replaces_in_place() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"upsert-pw").expect("open");

    vault.save("10.0.0.1", "root", "a", "manager").expect("save a");
    vault.save("10.0.0.1", "root", "b", "manager").expect("save b");

    // Exactly one record for the pair, holding the new secret.
    let all = vault.list_all().expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(vault.fetch("10.0.0.1", "root").unwrap().as_deref(), Some("b"));
}

#[test]
fn upsert_preserves_record_id() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"id-pw").expect("open");

    vault.save("10.0.0.1", "root", "first", "").expect("save");

    let store = RecordStore::open(&path).expect("open store");
    let id_before = store.get("10.0.0.1", "root").unwrap().unwrap().id;

    vault.save("10.0.0.1", "root", "second", "worker").expect("resave");

    let record = store.get("10.0.0.1", "root").unwrap().unwrap();
    assert_eq!(record.id, id_before, "replace must keep the surrogate id");
    assert_eq!(record.role, "worker");
}

#[test]
fn record_ids_are_monotonic_and_never_reused() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"monotonic-pw").expect("open");

    vault.save("a", "root", "1", "").expect("save a");
    vault.save("b", "root", "2", "").expect("save b");
    vault.delete("a", "root").expect("delete a");
    vault.save("c", "root", "3", "").expect("save c");

    let store = RecordStore::open(&path).expect("open store");
    let id_b = store.get("b", "root").unwrap().unwrap().id;
    let id_c = store.get("c", "root").unwrap().unwrap().id;
    assert!(id_c > id_b, "new records must get fresh, larger ids");
}

// ---------------------------------------------------------------------------
// Absence is not failure
// ---------------------------------------------------------------------------

#[test]
fn fetch_missing_pair_returns_none() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"absent-pw").expect("open");

    let result = vault.fetch("10.0.0.2", "nouser").expect("fetch must not error");
    assert!(result.is_none());
}

#[test]
fn delete_missing_pair_is_a_noop() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"noop-pw").expect("open");

    vault.save("10.0.0.1", "root", "keep", "").expect("save");
    vault.delete("10.0.0.2", "nouser").expect("delete must not error");

    // The unrelated record is untouched.
    assert_eq!(vault.list_all().unwrap().len(), 1);
}

#[test]
fn delete_removes_the_record() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"delete-pw").expect("open");

    vault.save("10.0.0.1", "root", "gone-soon", "").expect("save");
    vault.delete("10.0.0.1", "root").expect("delete");

    assert!(vault.fetch("10.0.0.1", "root").unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn list_all_returns_every_record_decrypted() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"list-pw").expect("open");

    for i in 0..5 {
        vault
            .save(&format!("10.0.0.{i}"), "root", &format!("secret-{i}"), "worker")
            .expect("save");
    }

    let all = vault.list_all().expect("list");
    assert_eq!(all.len(), 5);
    for (i, cred) in all.iter().enumerate() {
        assert_eq!(cred.server, format!("10.0.0.{i}"));
        assert_eq!(cred.secret, format!("secret-{i}"));
        assert_eq!(cred.role, "worker");
    }
}

#[test]
fn list_all_on_empty_store_is_empty() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"empty-pw").expect("open");
    assert!(vault.list_all().expect("list").is_empty());
}

// ---------------------------------------------------------------------------
// Wrong passphrase
// ---------------------------------------------------------------------------

#[test]
fn fetch_with_wrong_passphrase_is_decryption_error() {
    let (_dir, path) = db_path();

    {
        let vault = Vault::open(&path, b"right-pw").expect("open");
        vault.save("10.0.0.1", "root", "secret", "").expect("save");
        vault.close().expect("close");
    }

    // Opening with a wrong passphrase succeeds — the failure surfaces
    // on the first read, and it is distinct from "record absent".
    let vault = Vault::open(&path, b"wrong-pw").expect("open must succeed");
    let result = vault.fetch("10.0.0.1", "root");
    assert!(matches!(result, Err(HostVaultError::Decryption)));
}

#[test]
fn list_all_with_wrong_passphrase_fails_entirely() {
    let (_dir, path) = db_path();

    {
        let vault = Vault::open(&path, b"right-pw").expect("open");
        vault.save("10.0.0.1", "root", "one", "").expect("save");
        vault.save("10.0.0.2", "root", "two", "").expect("save");
        vault.close().expect("close");
    }

    let vault = Vault::open(&path, b"wrong-pw").expect("open");
    let result = vault.list_all();
    assert!(
        matches!(result, Err(HostVaultError::Decryption)),
        "a partial listing under the wrong key must not be returned"
    );
}

// ---------------------------------------------------------------------------
// Ciphertext properties observed through the store
// ---------------------------------------------------------------------------

#[test]
fn store_never_holds_plaintext() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"opaque-pw").expect("open");

    vault
        .save("10.0.0.1", "root", "plaintext-marker", "")
        .expect("save");

    let store = RecordStore::open(&path).expect("open store");
    let record = store.get("10.0.0.1", "root").unwrap().unwrap();
    assert!(!record.secret_ciphertext.contains("plaintext-marker"));
}

#[test]
fn resealing_identical_secret_changes_the_blob() {
    let (_dir, path) = db_path();
    let vault = Vault::open(&path, b"fresh-nonce-pw").expect("open");

    vault.save("10.0.0.1", "root", "same", "").expect("save 1");
    let store = RecordStore::open(&path).expect("open store");
    let blob1 = store.get("10.0.0.1", "root").unwrap().unwrap().secret_ciphertext;

    vault.save("10.0.0.1", "root", "same", "").expect("save 2");
    let blob2 = store.get("10.0.0.1", "root").unwrap().unwrap().secret_ciphertext;

    assert_ne!(blob1, blob2, "every seal must use a fresh nonce");
}

// ---------------------------------------------------------------------------
// Storage layout
// ---------------------------------------------------------------------------

#[test]
fn open_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("credentials.db");

    let vault = Vault::open(&path, b"layout-pw").expect("open");
    vault.save("10.0.0.1", "root", "x", "").expect("save");

    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn database_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = db_path();
    let _vault = Vault::open(&path, b"perm-pw").expect("open");

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600, "credentials.db should be 0o600");
}
