use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shop_types::api::{
    CreateProductRequest, CreatedProduct, ErrorBody, LoginRequest, Message, ProductBody,
    ProductList, RegisterRequest, RegisteredUser, UpdatedProduct, UpdatedUser, UserBody, UserList,
};
use shop_types::domain::product::{Product, ProductUpdate};
use shop_types::domain::user::{User, UserUpdate};

/// A non-success response from the API, carrying the server's `error` message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Clone)]
pub struct ShopClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct ShopClient {
    base: Url,
    client: reqwest::Client,
}

impl ShopClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ShopClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(ShopClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> anyhow::Result<T> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json().await?);
        }
        let message = match res.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
        };
        tracing::debug!(%status, %message, "api call failed");
        Err(ApiError { status, message }.into())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let res = self.client.get(self.url(path)?).send().await?;
        Self::decode(res).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let res = self.client.post(self.url(path)?).json(body).send().await?;
        Self::decode(res).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let res = self.client.put(self.url(path)?).json(body).send().await?;
        Self::decode(res).await
    }

    async fn delete(&self, path: &str) -> anyhow::Result<String> {
        let res = self.client.delete(self.url(path)?).send().await?;
        let body: Message = Self::decode(res).await?;
        Ok(body.msg)
    }

    pub async fn list_users(&self) -> anyhow::Result<UserList> {
        self.get("users").await
    }

    pub async fn get_user(&self, id: &str) -> anyhow::Result<User> {
        let body: UserBody = self.get(&format!("user/{id}")).await?;
        Ok(body.user)
    }

    pub async fn register(&self, req: &RegisterRequest) -> anyhow::Result<User> {
        let body: RegisteredUser = self.post("register", req).await?;
        Ok(body.new_user)
    }

    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<User> {
        let req = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        let body: UserBody = self.post("login", &req).await?;
        Ok(body.user)
    }

    pub async fn update_user(&self, id: &str, changes: &UserUpdate) -> anyhow::Result<User> {
        let body: UpdatedUser = self.put(&format!("user/{id}"), changes).await?;
        Ok(body.updated_user)
    }

    /// Returns the server's confirmation message.
    pub async fn delete_user(&self, id: &str) -> anyhow::Result<String> {
        self.delete(&format!("user/{id}")).await
    }

    pub async fn list_products(&self) -> anyhow::Result<ProductList> {
        self.get("products").await
    }

    pub async fn get_product(&self, id: &str) -> anyhow::Result<Product> {
        let body: ProductBody = self.get(&format!("product/{id}")).await?;
        Ok(body.product)
    }

    pub async fn create_product(&self, req: &CreateProductRequest) -> anyhow::Result<Product> {
        let body: CreatedProduct = self.post("product", req).await?;
        Ok(body.new_product)
    }

    pub async fn update_product(
        &self,
        id: &str,
        changes: &ProductUpdate,
    ) -> anyhow::Result<Product> {
        let body: UpdatedProduct = self.put(&format!("product/{id}"), changes).await?;
        Ok(body.updated_product)
    }

    pub async fn delete_product(&self, id: &str) -> anyhow::Result<String> {
        self.delete(&format!("product/{id}")).await
    }
}

impl ShopClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<ShopClient> {
        if let Some(client) = self.client {
            return Ok(ShopClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(ShopClient {
            base: self.base,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn sample_user() -> User {
        User {
            id: uuid::Uuid::new_v4(),
            username: "user".into(),
            email: "user@example.com".into(),
            password: "pw".into(),
        }
    }

    fn sample_product() -> Product {
        Product {
            id: uuid::Uuid::new_v4(),
            name: "Widget".into(),
            price: 5.0,
            quantity: 1,
            image: "widget.png".into(),
        }
    }

    #[tokio::test]
    async fn register_and_login() {
        let server = MockServer::start();
        let user = sample_user();

        let register_mock = server.mock(|when, then| {
            when.method(POST).path("/register").json_body(json!({
                "username": user.username,
                "email": user.email,
                "password": user.password,
            }));
            then.status(201).json_body_obj(&RegisteredUser {
                new_user: user.clone(),
            });
        });

        let login_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/login")
                .json_body(json!({ "email": user.email, "password": user.password }));
            then.status(200).json_body_obj(&UserBody { user: user.clone() });
        });

        let client = ShopClient::new(&server.base_url()).unwrap();
        let created = client
            .register(&RegisterRequest {
                username: user.username.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
            })
            .await
            .unwrap();
        assert_eq!(created, user);

        let logged_in = client.login(&user.email, &user.password).await.unwrap();
        assert_eq!(logged_in.id, user.id);

        register_mock.assert();
        login_mock.assert();
    }

    #[tokio::test]
    async fn error_bodies_become_api_errors() {
        let server = MockServer::start();
        let login_mock = server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(401)
                .json_body(json!({ "error": "Incorrect password!" }));
        });

        let client = ShopClient::new(&server.base_url()).unwrap();
        let err = client.login("a@b.com", "nope").await.unwrap_err();
        let api = err.downcast_ref::<ApiError>().expect("api error");
        assert_eq!(api.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api.message, "Incorrect password!");

        login_mock.assert();
    }

    #[tokio::test]
    async fn product_list_update_delete() {
        let server = MockServer::start();
        let product = sample_product();

        let list_mock = server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body_obj(&ProductList {
                total: 1,
                all_products: vec![product.clone()],
            });
        });

        let update_mock = server.mock(|when, then| {
            when.method(httpmock::Method::PUT)
                .path(format!("/product/{}", product.id))
                .json_body(json!({ "quantity": 4 }));
            let mut updated = product.clone();
            updated.quantity = 4;
            then.status(200).json_body_obj(&UpdatedProduct {
                msg: "Product updated successfully".into(),
                updated_product: updated,
            });
        });

        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path(format!("/product/{}", product.id));
            then.status(200)
                .json_body(json!({ "msg": "Product deleted successfully." }));
        });

        let client = ShopClient::new(&server.base_url()).unwrap();
        let listed = client.list_products().await.unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.all_products[0], product);

        let updated = client
            .update_product(
                &product.id.to_string(),
                &ProductUpdate {
                    quantity: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.quantity, 4);

        let msg = client
            .delete_product(&product.id.to_string())
            .await
            .unwrap();
        assert_eq!(msg, "Product deleted successfully.");

        list_mock.assert();
        update_mock.assert();
        delete_mock.assert();
    }

    #[tokio::test]
    async fn builder_sends_default_headers() {
        let server = MockServer::start();
        let user = sample_user();
        let get_mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/user/{}", user.id))
                .header("x-client", "tests");
            then.status(200).json_body_obj(&UserBody { user: user.clone() });
        });

        let client = ShopClient::builder(&server.base_url())
            .unwrap()
            .with_header("x-client", "tests")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let fetched = client.get_user(&user.id.to_string()).await.unwrap();
        assert_eq!(fetched, user);
        get_mock.assert();
    }
}
