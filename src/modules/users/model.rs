pub use blogdeck_models::User;
