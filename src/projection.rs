//! Query-style projection: narrow each source record to a few fields.
//!
//! Projection is a plain order-preserving map. One output per input, nothing
//! filtered, nothing deduplicated. Values are copied out of the source, so later
//! changes to a [`Product`] never reach a record projected from it.

use serde::Serialize;

use crate::record::anonymous_record;

/// Mutable source entity with accessor/mutator pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    color: String,
    price: i32,
    other_attributes: String,
}

impl Product {
    pub fn new(color: impl Into<String>, price: i32, other_attributes: impl Into<String>) -> Self {
        Product {
            color: color.into(),
            price,
            other_attributes: other_attributes.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn set_price(&mut self, price: i32) {
        self.price = price;
    }

    pub fn other_attributes(&self) -> &str {
        &self.other_attributes
    }

    pub fn set_other_attributes(&mut self, other_attributes: impl Into<String>) {
        self.other_attributes = other_attributes.into();
    }
}

anonymous_record! {
    /// `{ Color, Price }` selected out of a [`Product`].
    pub struct ColorPrice {
        #[serde(rename = "Color")] color: String,
        #[serde(rename = "Price")] price: i32,
    }
}

impl From<&Product> for ColorPrice {
    fn from(product: &Product) -> Self {
        ColorPrice::new(product.color(), product.price())
    }
}

/// Maps every source record through `selector`, keeping order and length.
pub fn project<'a, S, T, F>(source: &'a [S], selector: F) -> Vec<T>
where
    F: FnMut(&'a S) -> T,
{
    source.iter().map(selector).collect()
}

/// Lazy form of [`project`] for any iterator of borrowed records.
pub trait Project<'a, S: 'a>: Iterator<Item = &'a S> + Sized {
    fn project<T, F>(self, selector: F) -> std::iter::Map<Self, F>
    where
        F: FnMut(&'a S) -> T,
    {
        self.map(selector)
    }
}

impl<'a, S: 'a, I> Project<'a, S> for I where I: Iterator<Item = &'a S> {}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("red", 1, "ok"),
        Product::new("red", 1, "ok"),
        Product::new("red", 1, "ok"),
    ]
}

pub fn color_price_query(products: &[Product]) -> Vec<ColorPrice> {
    project(products, ColorPrice::from)
}
