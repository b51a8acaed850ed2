pub mod image_storage;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;

pub use profile_repository_postgres::ProfileRepositoryPostgres;
