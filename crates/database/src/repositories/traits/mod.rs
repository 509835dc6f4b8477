//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口。
//!
//! 所有 Repository trait 都遵循统一的设计模式：
//!
//! ```rust
//! pub trait XxxRepositoryTrait: Send + Sync + Clone + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! ### Trait 约束说明
//!
//! - `Send` / `Sync`：handler在不同线程上并发执行，Repository实例
//!   需要安全地跨线程共享
//! - `Clone`：依赖注入时需要把Repository副本传给不同的handler
//! - `'static`：异步trait方法返回的 `Future` 要求不携带短生命周期引用
//!
//! web层的 `AppState` 以泛型参数持有这些trait（Policy Based Design），
//! 这样测试时可以注入内存实现，运行时注入Postgres实现。

pub mod project;
pub mod user;

// 重新导出
pub use project::ProjectRepositoryTrait;
pub use user::UserRepositoryTrait;
