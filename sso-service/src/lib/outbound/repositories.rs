pub mod memory;
pub mod postgres;

pub use memory::InMemoryAppRepository;
pub use memory::InMemoryUserRepository;
pub use postgres::PostgresAppRepository;
pub use postgres::PostgresUserRepository;
