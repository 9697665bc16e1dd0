//! Data models
//!
//! DB row types derive `sqlx::FromRow`; all IDs are `i64`
//! (SQLite INTEGER PRIMARY KEY, snowflake-generated).

pub mod menu_item;
pub mod order;
pub mod user;

pub use menu_item::{CATEGORIES, MenuItem, MenuItemInput};
pub use order::{Order, OrderCreate, OrderStatus, OrderWithItem};
pub use user::{Role, User, UserCreate};
