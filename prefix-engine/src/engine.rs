//! Style engine - compiles, prefixes and caches styles

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use prefix_css::StyleSheet;
use spin::Mutex;

use crate::classify::PrefixClassifier;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::hash::hash_string;
use crate::label::{extract_labels, LabelStripper};
use crate::plugin::StylePlugin;
use crate::prefixer::DefaultPrefixer;
use crate::rules::RuleTable;
use crate::serialize::Serializer;
use crate::walker::RuleWalker;

/// Styles ready to insert, named by content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedStyles {
    /// Content hash followed by `-<label>` for every label.
    pub name: String,
    /// Raw CSS-in-JS source.
    pub styles: String,
}

/// A named `@keyframes` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframes {
    pub name: String,
    pub styles: String,
}

/// Name raw style source by its hash and labels.
pub fn serialize_styles(styles: &str) -> SerializedStyles {
    let mut name = hash_string(styles);
    for label in extract_labels(styles) {
        name.push('-');
        name.push_str(&label);
    }
    SerializedStyles {
        name,
        styles: String::from(styles),
    }
}

/// Builds a [`StyleEngine`] with extra plugins.
///
/// The label stripper always runs first and the default prefixer always
/// runs last; registered plugins run in between, in registration order.
pub struct EngineBuilder {
    config: EngineConfig,
    plugins: Vec<Box<dyn StylePlugin>>,
}

impl EngineBuilder {
    pub fn new(config: EngineConfig) -> Self {
        EngineBuilder {
            config,
            plugins: Vec::new(),
        }
    }

    /// Register a plugin.
    pub fn plugin<P: StylePlugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Register a rule walker driven by `classifier`.
    pub fn classifier<C: PrefixClassifier + 'static>(self, classifier: C) -> Self {
        self.plugin(RuleWalker::new(classifier))
    }

    pub fn build(self) -> Result<StyleEngine> {
        self.config.validate()?;

        let mut plugins: Vec<Box<dyn StylePlugin>> = Vec::with_capacity(self.plugins.len() + 2);
        if self.config.strip_labels {
            plugins.push(Box::new(LabelStripper));
        }
        plugins.extend(self.plugins);
        if self.config.prefix {
            plugins.push(Box::new(DefaultPrefixer));
        }

        let engine = StyleEngine {
            config: self.config,
            plugins,
            inserted: Mutex::new(HashMap::new()),
            sheet: Mutex::new(Vec::new()),
        };
        log::debug!(
            "[prefix-engine] engine '{}' ready, plugins: {:?}",
            engine.config.key,
            engine.plugin_names()
        );
        Ok(engine)
    }
}

/// A style engine instance.
///
/// Compilation is a pure function of the source and the plugin chain. The
/// insertion cache and the inserted sheet are the only shared state.
pub struct StyleEngine {
    config: EngineConfig,
    plugins: Vec<Box<dyn StylePlugin>>,
    /// Class or keyframes name -> compiled CSS.
    inserted: Mutex<HashMap<String, String>>,
    /// Compiled CSS in insertion order.
    sheet: Mutex<Vec<String>>,
}

impl StyleEngine {
    /// Engine with the host's default behaviour only.
    pub fn new(config: EngineConfig) -> Result<Self> {
        EngineBuilder::new(config).build()
    }

    pub fn builder(config: EngineConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    /// Engine that skips the legacy vendor prefixes.
    pub fn with_legacy_suppression(config: EngineConfig) -> Result<Self> {
        EngineBuilder::new(config)
            .classifier(RuleTable::legacy())
            .build()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Plugin names in chain order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn css(&self, styles: &str) -> SerializedStyles {
        serialize_styles(styles)
    }

    /// Name a keyframes body.
    pub fn keyframes(&self, body: &str) -> Keyframes {
        let name = format!("animation-{}", hash_string(body));
        let styles = format!("@keyframes {}{{{}}}", name, body);
        Keyframes { name, styles }
    }

    /// Class name `styles` is inserted under.
    pub fn class_name(&self, styles: &SerializedStyles) -> String {
        format!("{}-{}", self.config.key, styles.name)
    }

    /// Compile and register `styles`, returning its class name.
    ///
    /// Styles already registered under the same name are not compiled again.
    pub fn insert(&self, styles: &SerializedStyles) -> String {
        let class = self.class_name(styles);
        if self.inserted.lock().contains_key(&class) {
            log::trace!("[prefix-engine] cache hit for {}", class);
            return class;
        }

        let css = self.compile(&format!(".{}", class), &styles.styles);
        self.register(&class, css);
        class
    }

    /// Compile and register a keyframes block, returning its name.
    pub fn insert_keyframes(&self, keyframes: &Keyframes) -> String {
        if self.inserted.lock().contains_key(&keyframes.name) {
            log::trace!("[prefix-engine] cache hit for {}", keyframes.name);
            return keyframes.name.clone();
        }

        let css = self.compile_global(&keyframes.styles);
        self.register(&keyframes.name, css);
        keyframes.name.clone()
    }

    /// Compile unscoped styles and append them to the sheet.
    ///
    /// Global styles are not cached; every call appends.
    pub fn insert_global(&self, styles: &str) -> String {
        let css = self.compile_global(styles);
        self.sheet.lock().push(css.clone());
        css
    }

    fn register(&self, name: &str, css: String) {
        let mut inserted = self.inserted.lock();
        if inserted.contains_key(name) {
            return;
        }
        inserted.insert(String::from(name), css.clone());
        self.sheet.lock().push(css);
        log::debug!("[prefix-engine] inserted {}", name);
    }

    /// Compile `styles` scoped under `selector`, without caching.
    pub fn compile(&self, selector: &str, styles: &str) -> String {
        let mut sheet = prefix_css::compile(selector, styles);
        self.serializer().serialize(&mut sheet)
    }

    /// Compile unscoped `styles`, without caching.
    pub fn compile_global(&self, styles: &str) -> String {
        let mut sheet = prefix_css::compile_global(styles);
        self.serializer().serialize(&mut sheet)
    }

    /// Like [`compile`](Self::compile), but reject source the parser had
    /// to recover from.
    pub fn compile_strict(&self, selector: &str, styles: &str) -> Result<String> {
        self.serialize_strict(prefix_css::compile(selector, styles))
    }

    /// Like [`compile_global`](Self::compile_global), but reject source the
    /// parser had to recover from.
    pub fn compile_global_strict(&self, styles: &str) -> Result<String> {
        self.serialize_strict(prefix_css::compile_global(styles))
    }

    fn serialize_strict(&self, mut sheet: StyleSheet) -> Result<String> {
        if let Some(error) = sheet.errors().first() {
            return Err(error.clone().into());
        }
        Ok(self.serializer().serialize(&mut sheet))
    }

    fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.plugins, self.config.vendors)
    }

    /// All inserted CSS, in insertion order.
    pub fn sheet(&self) -> String {
        self.sheet.lock().concat()
    }

    /// Compiled CSS registered under `name`, if any.
    pub fn registered(&self, name: &str) -> Option<String> {
        self.inserted.lock().get(name).cloned()
    }

    /// Forget everything inserted so far.
    pub fn flush(&self) {
        self.inserted.lock().clear();
        self.sheet.lock().clear();
    }
}
