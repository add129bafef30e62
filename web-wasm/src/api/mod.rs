//! バックエンドAPI連携

pub mod backend;
pub mod file;
