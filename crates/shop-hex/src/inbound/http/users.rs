use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::Payload;
use crate::application::user_service::UserService;
use crate::errors::AppError;
use shop_types::api::{
    LoginRequest, Message, RegisterRequest, RegisteredUser, UpdatedUser, UserBody, UserList,
};
use shop_types::domain::user::UserUpdate;
use shop_types::ports::user_repository::UserRepository;

pub fn router<R: UserRepository>(service: Arc<UserService<R>>) -> Router {
    Router::new()
        .route("/users", get(list_users::<R>))
        .route(
            "/user/{id}",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>),
        )
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>))
        .with_state(service)
}

async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Result<Json<UserList>, AppError> {
    let users = service.list_users().await?;
    Ok(Json(UserList {
        total_users: users.len(),
        all_users: users,
    }))
}

async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<UserBody>, AppError> {
    let user = service.get_user(&id).await?;
    Ok(Json(UserBody { user }))
}

async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Payload(payload): Payload<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>), AppError> {
    let new_user = service
        .register(payload.username, payload.email, payload.password)
        .await?;
    Ok((StatusCode::CREATED, Json(RegisteredUser { new_user })))
}

async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Payload(payload): Payload<LoginRequest>,
) -> Result<Json<UserBody>, AppError> {
    let user = service.login(&payload.email, &payload.password).await?;
    Ok(Json(UserBody { user }))
}

async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    Payload(changes): Payload<UserUpdate>,
) -> Result<Json<UpdatedUser>, AppError> {
    let updated_user = service.update_user(&id, changes).await?;
    Ok(Json(UpdatedUser {
        msg: "User updated successfully.".into(),
        updated_user,
    }))
}

async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    service.delete_user(&id).await?;
    Ok(Json(Message {
        msg: "User deleted successfully.".into(),
    }))
}
