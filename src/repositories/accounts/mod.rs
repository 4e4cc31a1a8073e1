//! 계정 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`AccountRepository`](account_repo::AccountRepository)를 통해 MongoDB 기반
//! 계정 데이터 관리와 Redis 캐싱을 제공합니다. `#[repository]` 매크로를 사용하여
//! 싱글톤으로 관리되며, 해석 로직은 [`AccountStore`](account_store::AccountStore)
//! trait 뒤에서 동작합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::account_repo::AccountRepository;
//!
//! let account_repo = AccountRepository::instance();
//! let account = account_repo.find_by_email("user@example.com").await?;
//! ```

pub mod account_repo;
pub mod account_store;

pub use account_repo::AccountRepository;
pub use account_store::{AccountStore, AccountUpdate, InsertOutcome};
