//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct CreatedBody {
    pub message: String,
    pub id: i64,
}

#[derive(Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ListBody<T> {
    pub results: Vec<T>,
    pub meta: MetaTotal,
}

#[derive(Serialize)]
pub struct MetaTotal {
    pub total: u64,
}

pub fn created(message: String, id: i64) -> (StatusCode, Json<CreatedBody>) {
    (StatusCode::OK, Json(CreatedBody { message, id }))
}

pub fn message(message: String) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message }))
}

pub fn data<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::OK, Json(DataBody { data }))
}

pub fn results<T: Serialize>(rows: Vec<T>) -> (StatusCode, Json<ListBody<T>>) {
    let total = rows.len() as u64;
    (
        StatusCode::OK,
        Json(ListBody {
            results: rows,
            meta: MetaTotal { total },
        }),
    )
}
