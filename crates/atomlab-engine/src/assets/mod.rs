pub mod category;
pub mod element;
pub mod registry;

pub use category::{
    Category, category_label_for_key, category_color_token_for_key, filter_options,
    NO_FILTER_LABEL, FALLBACK_LABEL, FALLBACK_COLOR_TOKEN,
};
pub use element::Element;
pub use registry::{ElementRegistry, RegistryError, ELEMENT_COUNT};
