//! Post CRUD handlers - thin adapters over the post resource service.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostPatch};
use quill_core::service::NewPostInput;
use quill_shared::dto::{CreatePostRequest, DeletePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn render(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        date: post.date.to_rfc3339(),
    }
}

/// GET /posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(render).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(render(post)))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let created = state
        .posts
        .create(NewPostInput {
            title: req.title,
            content: req.content,
            author: req.author,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Created().json(render(created)))
}

/// PATCH /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author,
    };

    let updated = state
        .posts
        .update(&path.into_inner(), patch, req.password.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(render(updated)))
}

/// DELETE /posts/{id} - the body is optional; it carries the password for
/// gated posts.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<DeletePostRequest>>,
) -> AppResult<HttpResponse> {
    let password = body.and_then(|b| b.into_inner().password);

    let deleted = state
        .posts
        .delete(&path.into_inner(), password.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(render(deleted)))
}
