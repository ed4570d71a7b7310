//! 存储服务集成测试
//!
//! 绕过 HTTP 层，直接对着临时 SQLite 文件验证
//! 存储操作的契约。

use tempfile::TempDir;

use user_management::app::users::model::ValidUser;
use user_management::app::users::service::UserService;
use user_management::core::error::CoreError;
use user_management::infrastructure::database::DatabaseManager;

async fn setup_service() -> (UserService, TempDir) {
    let dir = TempDir::new().unwrap();
    let database_url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("test.db").display()
    );

    let database = DatabaseManager::new(&database_url).await.unwrap();
    (UserService::new(database.pool().clone()), dir)
}

fn valid_user(name: &str, email: &str, age: i64) -> ValidUser {
    ValidUser {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

#[tokio::test]
async fn list_on_empty_table_returns_empty_vec() {
    let (service, _dir) = setup_service().await;

    let users = service.list().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn create_assigns_sequential_ids_and_timestamps() {
    let (service, _dir) = setup_service().await;

    let first = service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();
    let second = service
        .create(valid_user("李四", "lisi@example.com", 30))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.created_at, first.updated_at);
    assert!(second.created_at >= first.created_at);
}

#[tokio::test]
async fn duplicate_insert_fails_and_leaves_count_unchanged() {
    let (service, _dir) = setup_service().await;

    service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();

    let err = service
        .create(valid_user("王五", "zhangsan@example.com", 28))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::DuplicateEmail));
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_missing_id_fails_and_mutates_nothing() {
    let (service, _dir) = setup_service().await;

    let created = service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();

    let err = service
        .update(999, valid_user("王五", "wangwu@example.com", 28))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(999)));

    let users = service.list().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, created.name);
    assert_eq!(users[0].email, created.email);
}

#[tokio::test]
async fn update_preserves_id_and_created_at() {
    let (service, _dir) = setup_service().await;

    let created = service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();

    let updated = service
        .update(created.id, valid_user("张三丰", "zhangsanfeng@example.com", 100))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "张三丰");
    assert_eq!(updated.email, "zhangsanfeng@example.com");
    assert_eq!(updated.age, 100);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_to_another_records_email_conflicts() {
    let (service, _dir) = setup_service().await;

    service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();
    let second = service
        .create(valid_user("李四", "lisi@example.com", 30))
        .await
        .unwrap();

    let err = service
        .update(second.id, valid_user("李四", "zhangsan@example.com", 30))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::DuplicateEmail));

    // 用自己现有的邮箱更新不触发冲突
    let updated = service
        .update(second.id, valid_user("李四", "lisi@example.com", 31))
        .await
        .unwrap();
    assert_eq!(updated.age, 31);
}

#[tokio::test]
async fn delete_removes_record_and_second_delete_fails() {
    let (service, _dir) = setup_service().await;

    let created = service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();

    let deleted_id = service.delete(created.id).await.unwrap();
    assert_eq!(deleted_id, created.id);

    let users = service.list().await.unwrap();
    assert!(users.iter().all(|user| user.id != created.id));

    let err = service.delete(created.id).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}

#[tokio::test]
async fn deleted_email_can_be_reused() {
    let (service, _dir) = setup_service().await;

    let created = service
        .create(valid_user("张三", "zhangsan@example.com", 25))
        .await
        .unwrap();
    service.delete(created.id).await.unwrap();

    // 记录被真正删除，没有墓碑占着邮箱
    let recreated = service
        .create(valid_user("张三", "zhangsan@example.com", 26))
        .await
        .unwrap();
    assert!(recreated.id > created.id);
}
