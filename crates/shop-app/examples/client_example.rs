///  To run :
///  cargo r --example client_example
use shop_client::{ApiError, ShopClient};
use shop_hex::application::product_service::ProductService;
use shop_hex::application::user_service::UserService;
use shop_hex::inbound::http::{HttpServer, HttpServerConfig};
use shop_repo::build_repo;
use shop_types::api::{CreateProductRequest, RegisterRequest};
use shop_types::domain::product::ProductUpdate;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    // Use a temp file-backed SQLite DB so multiple connections see the same data.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("shop.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let repo = build_repo(Some(&db_url)).await?;
    let server = HttpServer::new(
        UserService::new(repo.clone()),
        ProductService::new(repo),
        HttpServerConfig { port },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = ShopClient::new(&addr)?;
    let user = client
        .register(&RegisterRequest {
            username: "example".into(),
            email: "example@example.com".into(),
            password: "example-pw".into(),
        })
        .await?;
    println!("Registered user id={}", user.id);

    let logged_in = client.login("example@example.com", "example-pw").await?;
    println!("Logged in as {}", logged_in.username);

    match client.login("example@example.com", "wrong").await {
        Ok(_) => println!("Unexpectedly logged in with a wrong password"),
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(api) => println!("Wrong password rejected: {api}"),
            None => return Err(err),
        },
    }

    let product = client
        .create_product(&CreateProductRequest {
            name: "Widget".into(),
            price: 9.99,
            quantity: 10,
            image: "https://example.com/widget.png".into(),
        })
        .await?;
    println!("Created product id={}", product.id);

    let restocked = client
        .update_product(
            &product.id.to_string(),
            &ProductUpdate {
                quantity: Some(25),
                ..Default::default()
            },
        )
        .await?;
    println!("Restocked {} to {}", restocked.name, restocked.quantity);

    let listed = client.list_products().await?;
    println!("{} product(s) in the catalogue", listed.total);

    println!("{}", client.delete_product(&product.id.to_string()).await?);
    println!("{}", client.delete_user(&user.id.to_string()).await?);

    handle.abort();
    Ok(())
}
