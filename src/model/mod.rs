//! Pure data structures (records and DTOs). The gym records implement the
//! [`Entity`](crate::framework::Entity) trait; [`Book`] is owned by the
//! [`BookService`](crate::catalog::BookService).

pub mod book;
pub mod equipment;
pub mod member;
pub mod payment;
pub mod user;

pub use book::*;
pub use equipment::*;
pub use member::*;
pub use payment::*;
pub use user::*;
