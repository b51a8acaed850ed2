pub mod profile_query_postgres;

pub use profile_query_postgres::ProfileQueryPostgres;
