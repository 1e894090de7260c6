#![cfg(feature = "sqlite")]

use shop_repo::sqlite::SqliteRepo;
use shop_types::domain::product::{Product, ProductUpdate};
use shop_types::domain::user::{User, UserUpdate};
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::user_repository::UserRepository;
use std::path::PathBuf;
use uuid::Uuid;

fn temp_db_url() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut path = PathBuf::from(dir.path());
    path.push(format!("shop-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    (dir, url)
}

#[tokio::test]
async fn sqlite_repo_user_crud_flow() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();

    let user = User::new("test".into(), "test@example.com".into(), "pw".into()).unwrap();
    let created = repo.create_user(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let fetched = repo.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, user);

    let by_email = repo
        .find_user_by_email("test@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    let updated = repo
        .update_user(
            user.id,
            UserUpdate {
                password: Some("changed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.password, "changed");
    assert_eq!(updated.email, "test@example.com");

    assert!(repo.delete_user(user.id).await.unwrap());
    assert!(repo.get_user(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_repo_product_crud_flow() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();

    let first = Product::new("Widget".into(), 2.5, 3, "w.png".into()).unwrap();
    let second = Product::new("Gadget".into(), 7.0, 1, "g.png".into()).unwrap();
    repo.create_product(first.clone()).await.unwrap();
    repo.create_product(second.clone()).await.unwrap();

    let listed = repo.list_products().await.unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    let updated = repo
        .update_product(
            first.id,
            ProductUpdate {
                name: Some("Widget XL".into()),
                price: Some(3.25),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Widget XL");
    assert_eq!(updated.price, 3.25);
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.image, "w.png");

    assert!(repo.delete_product(second.id).await.unwrap());
    assert_eq!(repo.list_products().await.unwrap().len(), 1);
}

#[tokio::test]
async fn sqlite_repo_reopens_existing_database() {
    let (_dir, url) = temp_db_url();
    let user = User::new("keep".into(), "keep@example.com".into(), "pw".into()).unwrap();
    {
        let repo = SqliteRepo::new(&url).await.unwrap();
        repo.create_user(user.clone()).await.unwrap();
    }
    let repo = SqliteRepo::new(&url).await.unwrap();
    assert_eq!(repo.get_user(user.id).await.unwrap(), Some(user));
}

#[tokio::test]
async fn sqlite_in_memory_url_shares_one_database() {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let product = Product::new("Widget".into(), 1.0, 1, "w.png".into()).unwrap();
    repo.create_product(product.clone()).await.unwrap();
    assert_eq!(repo.get_product(product.id).await.unwrap(), Some(product));
}

#[tokio::test]
async fn sqlite_repo_handles_missing_rows() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    let missing_id = uuid::Uuid::new_v4();

    assert!(repo.get_user(missing_id).await.unwrap().is_none());
    assert!(repo.get_product(missing_id).await.unwrap().is_none());

    let updated = repo
        .update_user(missing_id, UserUpdate::default())
        .await
        .unwrap();
    assert!(updated.is_none());

    let updated = repo
        .update_product(missing_id, ProductUpdate::default())
        .await
        .unwrap();
    assert!(updated.is_none());

    assert!(!repo.delete_user(missing_id).await.unwrap());
    assert!(!repo.delete_product(missing_id).await.unwrap());
}
