use dyndns_application::ports::HostRepository;
use dyndns_infrastructure::database::{create_pool, run_migrations};
use dyndns_infrastructure::repositories::SqliteHostRepository;

#[tokio::test]
async fn test_create_pool_creates_file_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dyndns.db");
    let url = format!("sqlite:{}", path.display());

    let pool = create_pool(&url, 2, 5).await.unwrap();
    assert!(path.exists());

    let repo = SqliteHostRepository::new(pool.clone());
    assert!(repo.get_all().await.unwrap().is_empty());
    pool.close().await;
}

#[tokio::test]
async fn test_hosts_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("dyndns.db").display());

    let pool = create_pool(&url, 1, 5).await.unwrap();
    SqliteHostRepository::new(pool.clone())
        .create(
            "home".to_string(),
            "example.com".to_string(),
            Some("198.51.100.4".to_string()),
            60,
            "home-user".to_string(),
            "$argon2id$stub".to_string(),
        )
        .await
        .unwrap();
    pool.close().await;

    let pool = create_pool(&url, 1, 5).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let host = SqliteHostRepository::new(pool)
        .find("home", "example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(host.ip.as_deref(), Some("198.51.100.4"));
}
