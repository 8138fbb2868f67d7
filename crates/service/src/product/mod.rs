pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{NameQuery, PriceRange, ProductInput};
pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;
