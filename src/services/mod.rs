pub mod migration_service;
