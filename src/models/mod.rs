mod icon;
mod example;
mod business_model;
mod catalog;

#[cfg(runtime)]
type String = &'static str;
#[cfg(not(runtime))]
type String = std::string::String;

#[cfg(runtime)]
type List<T> = &'static [T];
#[cfg(not(runtime))]
type List<T> = Vec<T>;

pub use self::icon::Icon;
pub use self::example::{Example, ExampleFacet};
pub use self::business_model::{BusinessModel, ModelFacet};
pub use self::catalog::Catalog;
