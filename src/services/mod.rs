// Services module for business logic
pub mod version_file_updater;
