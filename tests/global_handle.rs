//! The process-wide handle. Lives in its own test binary so nothing else
//! installs a handle first.

use accounts_db::database::{database, install_database};
use accounts_db::{create_noop_metrics, Database, DatabaseConfig};

mod common;

#[test]
fn second_install_is_refused_and_first_handle_kept() {
    // ---
    let metrics = create_noop_metrics().unwrap();
    let first = Database::new(common::dead_config(), metrics.clone());
    let second = Database::new(DatabaseConfig::new("postgres://elsewhere/accounts"), metrics);

    assert!(install_database(first));
    assert!(!install_database(second));

    let installed = database().expect("handle installed");
    assert_eq!(
        installed.config().database_url,
        common::dead_config().database_url
    );
}
