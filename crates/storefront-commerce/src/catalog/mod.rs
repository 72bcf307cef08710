//! Catalog types: products, categories, sizes.

mod product;

pub use product::{Category, Product, SelectedSize, SizeOption};
