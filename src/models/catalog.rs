use super::business_model::BusinessModel;

#[derive(Debug)]
pub struct Catalog {
    pub models: &'static [BusinessModel],
    pub models_map: phf::Map<u32, usize>,
    pub categories_map: phf::Map<&'static str, usize>,
}
