pub mod a001_product;
pub mod a002_service;
pub mod a003_artwork;
