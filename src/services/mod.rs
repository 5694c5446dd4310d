pub mod movies;
pub mod sessions;

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}

#[cfg(test)]
pub(crate) async fn test_db() -> sea_orm::DatabaseConnection {
    crate::db::connect_and_migrate("sqlite::memory:", 1).await.unwrap()
}
