//! 控制台客户端
//!
//! 通过命令行参数驱动状态控制器，演示表单/列表客户端
//! 与后端 API 的完整交互流程

use std::env;

use user_management::client::api::ApiClient;
use user_management::client::state::{Controller, FormMode};

#[tokio::main]
async fn main() {
    let base_url =
        env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());

    let args: Vec<String> = env::args().collect();
    let mut controller = Controller::new(ApiClient::new(&base_url));

    // 挂载：拉取当前列表，失败则从空列表开始
    controller.mount().await;

    match args.get(1).map(String::as_str) {
        Some("list") => {
            print_records(&controller);
        }
        Some("add") if args.len() == 5 => {
            controller.form.name = args[2].clone();
            controller.form.email = args[3].clone();
            controller.form.age = args[4].clone();
            controller.submit().await;
            report(&controller, "添加成功");
        }
        Some("update") if args.len() == 6 => {
            let id: i64 = match args[2].parse() {
                Ok(id) => id,
                Err(_) => {
                    println!("❌ id 必须是整数");
                    return;
                }
            };

            // 进入编辑模式后改写表单再提交
            let existing = controller.records.iter().find(|user| user.id == id).cloned();
            match existing {
                Some(user) => controller.select_for_edit(&user),
                None => controller.mode = FormMode::Editing(id),
            }
            controller.form.name = args[3].clone();
            controller.form.email = args[4].clone();
            controller.form.age = args[5].clone();
            controller.submit().await;
            report(&controller, "更新成功");
        }
        Some("delete") if args.len() == 3 => {
            let id: i64 = match args[2].parse() {
                Ok(id) => id,
                Err(_) => {
                    println!("❌ id 必须是整数");
                    return;
                }
            };
            controller.delete(id).await;
            report(&controller, "删除成功");
        }
        _ => {
            print_usage(&base_url);
        }
    }
}

fn print_records(controller: &Controller) {
    if controller.records.is_empty() {
        println!("（暂无用户）");
        return;
    }

    for user in &controller.records {
        println!(
            "#{} {} <{}> {}岁  创建于 {}",
            user.id, user.name, user.email, user.age, user.created_at
        );
    }
}

fn report(controller: &Controller, success: &str) {
    match &controller.message {
        Some(message) => println!("❌ {}", message),
        None => {
            println!("✅ {}", success);
            print_records(controller);
        }
    }
}

fn print_usage(base_url: &str) {
    println!("用户管理控制台客户端 (API: {})", base_url);
    println!();
    println!("用法: console_client <命令> [参数]");
    println!();
    println!("可用命令:");
    println!("  list                        - 显示用户列表");
    println!("  add <name> <email> <age>    - 添加用户");
    println!("  update <id> <name> <email> <age> - 更新用户");
    println!("  delete <id>                 - 删除用户");
    println!();
    println!("示例:");
    println!("  console_client list");
    println!("  console_client add 张三 zhangsan@example.com 25");
    println!("  console_client delete 1");
}
