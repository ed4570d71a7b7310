//! 客户端状态控制器
//!
//! 维护当前用户列表、表单字段和表单模式，
//! 每次变更成功后与 API 同步本地状态。

use tracing::warn;

use crate::app::users::model::User;

use super::api::{ApiClient, ClientError};

/// 表单模式：新建或编辑某条记录
///
/// 仅有的两个状态，由"选中一条记录编辑"和
/// "完成/取消编辑"两个动作切换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(i64),
}

/// 表单字段，保存用户输入的原始文本
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub age: String,
}

/// 表单/列表状态控制器
pub struct Controller {
    api: ApiClient,
    /// 当前已知的用户列表
    pub records: Vec<User>,
    /// 表单当前内容
    pub form: FormFields,
    /// 当前表单模式
    pub mode: FormMode,
    /// 最近一次需要展示给用户的消息
    pub message: Option<String>,
}

impl Controller {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            records: Vec::new(),
            form: FormFields::default(),
            mode: FormMode::Creating,
            message: None,
        }
    }

    /// 挂载时拉取列表，拉取失败则退回空列表
    pub async fn mount(&mut self) {
        match self.api.list_users().await {
            Ok(users) => self.records = users,
            Err(err) => {
                warn!("获取用户列表失败: {}", err);
                self.records = Vec::new();
            }
        }
    }

    /// 选中一条记录进入编辑模式，记录内容填入表单
    pub fn select_for_edit(&mut self, user: &User) {
        self.mode = FormMode::Editing(user.id);
        self.form = FormFields {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age.to_string(),
        };
    }

    /// 放弃编辑，回到新建模式并清空表单
    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Creating;
        self.form = FormFields::default();
    }

    /// 提交表单：新建模式走创建，编辑模式走更新
    pub async fn submit(&mut self) {
        if self.form.name.is_empty() || self.form.email.is_empty() || self.form.age.is_empty() {
            self.message = Some("请填写所有字段".to_string());
            return;
        }

        let age: i64 = match self.form.age.trim().parse() {
            Ok(age) => age,
            Err(_) => {
                self.message = Some("年龄必须是非负整数".to_string());
                return;
            }
        };

        match self.mode {
            FormMode::Creating => self.create(age).await,
            FormMode::Editing(id) => self.update(id, age).await,
        }
    }

    /// 删除记录，成功后从本地列表按 id 移除
    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_user(id).await {
            Ok(_) => {
                self.records.retain(|user| user.id != id);
                self.message = None;
            }
            Err(err) => self.message = Some(err.user_message()),
        }
    }

    async fn create(&mut self, age: i64) {
        match self
            .api
            .create_user(&self.form.name, &self.form.email, age)
            .await
        {
            Ok(user) => {
                // 创建成功：返回的记录直接追加到本地列表
                self.records.push(user);
                self.cancel_edit();
                self.message = None;
            }
            Err(err) => self.message = Some(err.user_message()),
        }
    }

    async fn update(&mut self, id: i64, age: i64) {
        match self
            .api
            .update_user(id, &self.form.name, &self.form.email, age)
            .await
        {
            Ok(_) => {
                // 更新成功：整表重新拉取，保持与服务端一致
                self.mount().await;
                self.cancel_edit();
                self.message = None;
            }
            Err(err) => self.message = Some(err.user_message()),
        }
    }
}
