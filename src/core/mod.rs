pub mod batch;
pub mod client;
pub mod crypto;
pub mod engine;
pub mod render;

pub use crate::domain::model::{Code, EncryptedPayload, Passenger, StatusRecord};
pub use crate::domain::ports::{ConfigProvider, StatusClient};
pub use crate::utils::error::Result;
