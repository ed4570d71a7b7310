//! 用户字段校验
//!
//! 校验顺序固定：先必填，再格式，最后取值范围。
//! 每一步失败对应独立的错误类型，可以单独测试。
//! 纯检查，不触碰存储层。

use crate::core::error::CoreError;

use super::model::{UserPayload, ValidUser};

/// 校验请求体，返回可入库的用户数据
///
/// name 会去掉首尾空白，email 去掉空白并转为小写
pub fn validate(payload: &UserPayload) -> Result<ValidUser, CoreError> {
    // 1. 必填检查
    let name = match payload.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(CoreError::MissingField("name")),
    };

    let email = match payload.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => email.to_lowercase(),
        _ => return Err(CoreError::MissingField("email")),
    };

    let age_value = match payload.age.as_ref() {
        Some(value) if !value.is_null() => value,
        _ => return Err(CoreError::MissingField("age")),
    };

    // 2. 格式检查
    if !is_valid_email(&email) {
        return Err(CoreError::InvalidEmail);
    }

    // 3. 范围检查
    let age = match age_value.as_i64() {
        Some(age) if age >= 0 => age,
        _ => return Err(CoreError::InvalidAge),
    };

    Ok(ValidUser { name, email, age })
}

/// 检查邮箱是否符合 local@domain.tld 形式
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // 域名必须带点，且点两侧非空
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
