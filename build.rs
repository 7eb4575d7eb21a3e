use std::path::PathBuf;
#[cfg(feature = "gui")]
use std::path::Path;
use anyhow::{Context, Result};
use catalog_source::models::{BusinessModel, Example};
use catalog_source::{CatalogIndexMaps, CatalogSource, CatalogValidator, TomlExtractor};
use phf_codegen::Map;
use std::collections::HashMap;

const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const CATALOG_SOURCE_ENV: &str = "BUSINESS_CATALOG_DATA";
const DEFAULT_CATALOG_SOURCE: &str = "data/catalog.toml";

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    output_dir: PathBuf,
    catalog_source_file: PathBuf,
    catalog_file: PathBuf,
    #[cfg(feature = "gui")]
    resources_dir: PathBuf,
    #[cfg(feature = "gui")]
    resources_ui_file: PathBuf,
    #[cfg(feature = "gui")]
    resources_xml_file: PathBuf,
    #[cfg(feature = "gui")]
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = PathBuf::from(
            std::env::var("OUT_DIR").context("OUT_DIR is not set for the build script")?
        );
        let catalog_source_file = std::env::var(CATALOG_SOURCE_ENV)
            .map_or_else(|_| root.join(DEFAULT_CATALOG_SOURCE), PathBuf::from);
        let catalog_file = output_dir.join("catalog.rs");

        #[cfg(feature = "gui")]
        let resources_dir = root.join("resources");

        Ok(Self {
            catalog_source_file,
            catalog_file,
            #[cfg(feature = "gui")]
            resources_ui_file: resources_dir.join("ui.xml"),
            #[cfg(feature = "gui")]
            resources_xml_file: output_dir.join("resources.xml"),
            #[cfg(feature = "gui")]
            compiled_resources_file: output_dir.join("compiled.gresources"),
            #[cfg(feature = "gui")]
            resources_dir,
            output_dir,
        })
    }
}

// ===== APPLICATION METADATA =====

#[allow(dead_code)]
struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
    authors: Vec<String>,
    categories: Vec<String>,
    keywords: Vec<String>,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let categories = TomlExtractor::extract_string_array(package, "categories")?;
        let keywords = TomlExtractor::extract_string_array(package, "keywords")?;
        let id = TomlExtractor::extract_string(metadata, "id")?;
        let prefix = TomlExtractor::extract_string(metadata, "prefix")?;
        let title = TomlExtractor::extract_string(metadata, "title")?;
        let authors = Self::extract_authors(metadata)?;

        Ok(Self {
            name,
            description,
            version,
            id,
            prefix,
            title,
            authors,
            categories,
            keywords,
        })
    }

    fn extract_authors(metadata: &toml::Value) -> Result<Vec<String>> {
        let cargo_authors = env!("CARGO_PKG_AUTHORS");
        if !cargo_authors.is_empty() {
            return Ok(cargo_authors.split(':').map(|s| s.to_string()).collect());
        }

        Ok(vec![TomlExtractor::extract_string(metadata, "author")?])
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_id_phf_map(map: &HashMap<u32, usize>) -> String {
        let entries = map.iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect::<Vec<_>>();

        let mut phf_builder = Map::new();
        for (key, value) in &entries {
            phf_builder.entry(*key, value.as_str());
        }

        phf_builder.build().to_string()
    }

    fn format_string_phf_map<K: AsRef<str>>(map: &HashMap<K, usize>) -> String {
        let entries = map.iter()
            .map(|(key, value)| (key.as_ref(), value.to_string()))
            .collect::<Vec<_>>();

        let mut phf_builder = Map::new();
        for (key, value) in &entries {
            phf_builder.entry(*key, value.as_str());
        }

        phf_builder.build().to_string()
    }

    fn format_string_list(items: &[String]) -> String {
        format!("&{items:?}")
    }

    fn format_example_struct(example: &Example) -> String {
        format!(
            "Example {{
                name: {name:?},
                description: {description:?},
                ui_considerations: {ui_considerations},
                key_features: {key_features},
                user_flow: {user_flow},
                interactive_elements: {interactive_elements},
                design_patterns: {design_patterns}
            }}",
            name = example.name,
            description = example.description,
            ui_considerations = Self::format_string_list(&example.ui_considerations),
            key_features = Self::format_string_list(&example.key_features),
            user_flow = Self::format_string_list(&example.user_flow),
            interactive_elements = Self::format_string_list(&example.interactive_elements),
            design_patterns = Self::format_string_list(&example.design_patterns)
        )
    }

    fn format_model_struct(model: &BusinessModel) -> String {
        let examples = model.examples.iter()
            .map(Self::format_example_struct)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "BusinessModel {{
                id: {id},
                category: {category:?},
                icon: Icon::{icon:?},
                description: {description:?},
                examples: &[{examples}],
                accessibility_features: {accessibility_features},
                responsive_considerations: {responsive_considerations}
            }}",
            id = model.id,
            category = model.category,
            icon = model.icon,
            description = model.description,
            accessibility_features = Self::format_string_list(&model.accessibility_features),
            responsive_considerations = Self::format_string_list(&model.responsive_considerations)
        )
    }

    fn format_models_array(models: &[BusinessModel]) -> String {
        models.iter()
            .map(Self::format_model_struct)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn build_catalog_struct_code(models: &[BusinessModel], index_maps: &CatalogIndexMaps) -> String {
        let models_array = Self::format_models_array(models);
        let models_map = Self::format_id_phf_map(&index_maps.id_to_index);
        let categories_map = Self::format_string_phf_map(&index_maps.category_to_index);

        format!(
            "Catalog {{
                models: &[{models_array}],
                models_map: {models_map},
                categories_map: {categories_map}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<usize> {
        let catalog = CatalogSource::read(&self.config.catalog_source_file)?;
        let warnings = CatalogValidator::validate(&catalog.models)?;

        for warning in catalog.warnings.iter().chain(&warnings) {
            println!("cargo:warning={warning}");
        }

        self.write_catalog_code_to_file(&catalog.models)?;
        Ok(catalog.models.len())
    }

    fn write_catalog_code_to_file(&self, models: &[BusinessModel]) -> Result<()> {
        let index_maps = CatalogIndexMaps::build_from_models(models);
        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(models, &index_maps);

        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== TEMPLATE EXTRACTOR =====

#[cfg(feature = "gui")]
struct TemplateExtractor {
    template_regex: regex::Regex,
    extracted_templates: HashMap<String, String>,
}

#[cfg(feature = "gui")]
impl TemplateExtractor {
    fn new() -> Result<Self> {
        let template_regex = regex::Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;
        let extracted_templates = HashMap::new();
        Ok(Self { template_regex, extracted_templates })
    }

    fn extract_all_templates(&mut self, ui_xml: &str) -> &mut Self {
        for capture in self.template_regex.captures_iter(ui_xml) {
            if let Some(class_match) = capture.get(1) {
                let class_name = heck::AsSnakeCase(class_match.as_str()).to_string();
                let full_template = capture.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
                self.extracted_templates.insert(class_name, full_template);
            }
        }
        self
    }

    fn save_template_files_to_directory(&self, output_path: &Path) -> Result<&Self> {
        for (class_name, template_content) in &self.extracted_templates {
            let filename = format!("{class_name}.ui");
            let file_path = output_path.join(filename);
            let formatted_template = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{template_content}</interface>");
            std::fs::write(file_path, formatted_template)?;
        }
        Ok(self)
    }

    fn build_templates_resources_xml(&self) -> String {
        let mut class_names = self.extracted_templates.keys().collect::<Vec<_>>();
        class_names.sort();
        class_names
            .into_iter()
            .map(|class_name| format!("<file compressed=\"true\" alias=\"{class_name}.ui\">{class_name}.ui</file>"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ===== RESOURCE COMPILER =====

#[cfg(feature = "gui")]
struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
}

#[cfg(feature = "gui")]
impl<'a> ResourceCompiler<'a> {
    const RESOURCES_XML: &'static str = include_str!("resources/resources.gresource.xml.in");

    fn new(config: &'a BuildConfiguration, app_prefix: &'a str) -> Self {
        Self { config, app_prefix }
    }

    fn compile_resources(&self) -> Result<()> {
        let ui_xml = std::fs::read_to_string(&self.config.resources_ui_file)
            .context("Failed to read resources/ui.xml")?;

        let mut extractor = TemplateExtractor::new()?;
        let templates_xml = extractor
            .extract_all_templates(&ui_xml)
            .save_template_files_to_directory(&self.config.output_dir)?
            .build_templates_resources_xml();

        let final_xml = Self::replace_exactly(Self::RESOURCES_XML, "@APP_TEMPLATES@", &templates_xml)?;
        let final_xml = Self::replace_exactly(&final_xml, "@APP_PREFIX@", self.app_prefix)?;
        std::fs::write(&self.config.resources_xml_file, &final_xml)?;

        glib_build_tools::compile_resources(
            &[self.config.output_dir.as_path(), self.config.resources_dir.as_path()],
            self.config.resources_xml_file.to_str().context("Invalid XML path")?,
            self.config.compiled_resources_file.to_str().context("Invalid compiled file path")?,
        );

        Ok(())
    }

    fn replace_exactly(text: &str, from: &str, to: &str) -> Result<String> {
        let parts: Vec<&str> = text.split(from).collect();
        if parts.len() != 2 {
            anyhow::bail!("Expected exactly one '{from}' placeholder in resources.gresource.xml.in, found {}", parts.len() - 1);
        }
        Ok(parts.join(to))
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_build_configuration_flags() {
        println!("cargo:rustc-cfg=runtime");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_AUTHORS={}", metadata.authors.join(","));
    }

    #[cfg(feature = "gui")]
    fn emit_resources_path(resources_path: &Path) {
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }
}

// ===== BUILD ENVIRONMENT =====

struct BuildEnvironment;

impl BuildEnvironment {
    fn setup_cargo_configuration(config: &BuildConfiguration) {
        println!("cargo:rustc-check-cfg=cfg(runtime)");
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=src/models");
        println!("cargo:rerun-if-changed={}", config.catalog_source_file.display());
        println!("cargo:rerun-if-env-changed={CATALOG_SOURCE_ENV}");
        #[cfg(feature = "gui")]
        println!("cargo:rerun-if-changed=resources");
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        BuildEnvironment::setup_cargo_configuration(&self.config);

        CatalogProcessor::new(&self.config).process_catalog_data()?;
        self.compile_gui_resources()?;
        self.emit_cargo_environment_variables();

        Ok(())
    }

    #[cfg(feature = "gui")]
    fn compile_gui_resources(&self) -> Result<()> {
        ResourceCompiler::new(&self.config, &self.app_metadata.prefix).compile_resources()?;
        CargoEnvironmentVariables::emit_resources_path(&self.config.compiled_resources_file);
        Ok(())
    }

    #[cfg(not(feature = "gui"))]
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn compile_gui_resources(&self) -> Result<()> {
        Ok(())
    }

    fn emit_cargo_environment_variables(&self) {
        CargoEnvironmentVariables::emit_build_configuration_flags();
        CargoEnvironmentVariables::emit_application_metadata(&self.app_metadata);
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
