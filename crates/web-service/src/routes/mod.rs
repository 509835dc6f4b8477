//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 路由表：
//!
//! | 路径                    | 方法     | 说明               |
//! |------------------------|----------|--------------------|
//! | `/`                    | GET      | 首页项目列表        |
//! | `/create-project`      | GET      | 创建表单（需登录）  |
//! | `/store-project`       | POST     | 创建提交（需登录）  |
//! | `/detail-project/{id}` | GET      | 项目详情            |
//! | `/edit-project/{id}`   | GET/POST | 编辑（需登录）      |
//! | `/delete-project/{id}` | GET      | 删除（需登录）      |
//! | `/contact`             | GET      | 联系页              |
//! | `/register`            | GET/POST | 注册                |
//! | `/login`               | GET/POST | 登录                |
//! | `/logout`              | GET      | 退出登录            |
//! | `/public/...`          | GET      | 静态文件            |

use crate::middleware::require_login;
use crate::routes::auth::{login, login_page, logout, register, register_page};
use crate::routes::pages::{contact, home};
use crate::routes::projects::{
    create_project_page, delete_project, detail_project, edit_project_page, store_project,
    update_project,
};
use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use database::{ProjectRepositoryTrait, UserRepositoryTrait};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

pub mod auth;
pub mod pages;
pub mod projects;

/// 请求体大小上限，要装得下表单里上传的项目图片
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 挂载全部页面路由和 `/public/` 静态文件服务
/// - 初始化cookie会话层（进程内存储）
/// - 给需要登录的路由统一挂上登录门禁中间件
///
/// ## 参数定义
/// - shared_state: 共享数据，参考 [`AppState`] 定义。持有仓库实例和配置。
pub fn create_app_router<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    shared_state: AppState<PR, UR>,
) -> Router {
    let public_dir = shared_state.config.public_dir.clone();

    // 会话存储：进程内存。会话cookie只存session id，
    // 数据本体在服务端，重启即全部失效。
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    // 需要登录的路由统一走门禁中间件
    let protected = Router::new()
        .route("/create-project", get(create_project_page))
        .route("/store-project", post(store_project::<PR, UR>))
        .route(
            "/edit-project/{id}",
            get(edit_project_page::<PR, UR>).post(update_project::<PR, UR>),
        )
        .route("/delete-project/{id}", get(delete_project::<PR, UR>))
        .route_layer(axum::middleware::from_fn(require_login));

    Router::new()
        .route("/", get(home::<PR, UR>))
        .route("/detail-project/{id}", get(detail_project::<PR, UR>))
        .route("/contact", get(contact))
        .route("/register", get(register_page).post(register::<PR, UR>))
        .route("/login", get(login_page).post(login::<PR, UR>))
        .route("/logout", get(logout))
        .merge(protected)
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(session_layer)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}
