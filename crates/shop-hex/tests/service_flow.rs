use shop_hex::application::product_service::ProductService;
use shop_hex::application::user_service::UserService;
use shop_hex::errors::AppError;
use shop_repo::memory::InMemoryRepo;
use shop_types::domain::user::UserUpdate;

// End-to-end service flow against the in-memory adapter.
#[tokio::test]
async fn register_login_update_delete_flow() {
    let repo = InMemoryRepo::new();
    let svc = UserService::new(repo.clone());

    let user = svc
        .register("eve".into(), "eve@example.com".into(), "hunter2".into())
        .await
        .unwrap();

    let list = svc.list_users().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, user.id);

    let logged_in = svc.login("eve@example.com", "hunter2").await.unwrap();
    assert_eq!(logged_in, user);

    let updated = svc
        .update_user(
            &user.id.to_string(),
            UserUpdate {
                password: Some("correct horse".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.password, "correct horse");
    assert!(matches!(
        svc.login("eve@example.com", "hunter2").await,
        Err(AppError::Unauthorized(_))
    ));

    svc.delete_user(&user.id.to_string()).await.unwrap();
    assert!(matches!(
        svc.list_users().await,
        Err(AppError::NotFound(_))
    ));
}

// Email uniqueness is only checked at registration.
#[tokio::test]
async fn update_may_reuse_an_email() {
    let svc = UserService::new(InMemoryRepo::new());
    svc.register("a".into(), "a@example.com".into(), "pw".into())
        .await
        .unwrap();
    let b = svc
        .register("b".into(), "b@example.com".into(), "pw".into())
        .await
        .unwrap();

    let updated = svc
        .update_user(
            &b.id.to_string(),
            UserUpdate {
                email: Some("a@example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "a@example.com");
}

#[tokio::test]
async fn verticals_share_a_repo_but_not_data() {
    let repo = InMemoryRepo::new();
    let users = UserService::new(repo.clone());
    let products = ProductService::new(repo);

    users
        .register("u".into(), "u@example.com".into(), "pw".into())
        .await
        .unwrap();
    assert!(matches!(
        products.list_products().await,
        Err(AppError::NotFound(_))
    ));

    let product = products
        .create_product("Gadget".into(), 7.0, 3, "g.png".into())
        .await
        .unwrap();
    assert_eq!(products.list_products().await.unwrap(), vec![product]);
    assert_eq!(users.list_users().await.unwrap().len(), 1);
}
