//! HTTP request handlers.

pub mod dogs;
pub mod health;
pub mod owners;
pub mod sitters;

pub use dogs::{
    create_dog_handler, delete_dog_handler, get_dog_handler, list_dogs_handler, update_dog_handler,
};
pub use health::health_handler;
pub use owners::{
    create_owner_handler, delete_owner_handler, get_owner_handler, list_owners_handler,
    update_owner_handler,
};
pub use sitters::{
    delete_me_handler, get_me_handler, login_handler, logout_handler, register_handler,
    update_me_handler,
};
