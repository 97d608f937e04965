mod builtin;
mod catalog;
pub mod filter;
mod genre;
mod load;

pub use catalog::{GenreCatalog, Problem as LoadCatalogProblem};
pub use filter::{search, GenreFilter};
pub use genre::{decade_label, decade_of, parse_origin_year, Genre, GenreCategory};
pub use load::load_catalog;
