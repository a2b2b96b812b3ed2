/// Data model for Todostack
///
/// This module contains the storage entities and the representations (DTOs)
/// exchanged with the API layer. The two shapes are distinct on purpose:
/// entities mirror table rows, DTOs mirror request/response bodies, and
/// explicit conversion functions bridge them.
///
/// # Models
///
/// - `todo`: Todo entity, draft input, and representation
/// - `category`: Partial category representation (full category CRUD lives
///   outside this system; rows exist as a foreign-key target only)
/// - `user`: User account entity and representation

pub mod category;
pub mod todo;
pub mod user;
