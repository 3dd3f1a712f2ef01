//! Внешний API оценщика рук.
//!
//! Здесь описываются:
//! - строковый фасад (text.rs) — операции над текстом руки;
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — сериализуемые структуры для клиента;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;
pub mod text;

pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use text::*;
