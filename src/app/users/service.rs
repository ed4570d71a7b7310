//! 用户存储服务
//!
//! 所有 SQL 均为参数绑定。邮箱唯一性只依赖 email 列上的
//! 唯一索引，冲突由错误转换统一映射，不做入库前预查。

use chrono::Utc;
use sqlx::sqlite::SqlitePool;

use crate::core::error::CoreError;

use super::model::{User, ValidUser};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 按创建时间倒序返回全部用户，空表返回空列表
    pub async fn list(&self) -> Result<Vec<User>, CoreError> {
        let users =
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    /// 插入新用户，id 与两个时间戳由存储层生成
    pub async fn create(&self, data: ValidUser) -> Result<User, CoreError> {
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, age, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.age)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// 改写 name/email/age 并刷新 updated_at，id 和 created_at 不动
    pub async fn update(&self, id: i64, data: ValidUser) -> Result<User, CoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?, email = ?, age = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.age)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CoreError::NotFound(id))?;

        Ok(user)
    }

    /// 删除用户，返回被删除的 id
    pub async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }

        Ok(id)
    }

    /// 探测数据库连通性
    pub async fn ping(&self) -> Result<(), CoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
