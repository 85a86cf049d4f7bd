pub mod entity;
pub mod error;
pub mod key;
pub mod value;

pub use entity::Entity;
pub use error::{Error, Result};
pub use key::{IdOrName, Key, PathElement};
pub use value::{GeoPoint, Timestamp, Value};
