//! Ordered collection of component handlers.

use crate::button::ButtonComponent;
use crate::code::CodeComponent;
use crate::handler::ComponentHandler;
use crate::map::MapComponent;

/// Ordered collection of [`ComponentHandler`]s.
///
/// Handlers are appended at setup time and applied by the substitution
/// engine in registration order; the registry is read-only during
/// conversion. When two handlers' patterns could match overlapping text,
/// the one registered earlier wins for that span because its substitution
/// runs first.
///
/// No dedup or pattern-uniqueness validation is performed. Handler authors
/// are responsible for ensuring a handler's rendered HTML does not itself
/// match any registered pattern; the registry does not enforce this.
///
/// # Example
///
/// ```
/// use tagdown_components::{ComponentRegistry, MapComponent};
///
/// let registry = ComponentRegistry::new().with_component(MapComponent::new());
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("map").is_some());
/// ```
#[derive(Default)]
pub struct ComponentRegistry {
    handlers: Vec<Box<dyn ComponentHandler>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in handlers (map, button, code)
    /// in that order.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new()
            .with_component(MapComponent::new())
            .with_component(ButtonComponent::new())
            .with_component(CodeComponent::new())
    }

    /// Register a handler, builder style.
    #[must_use]
    pub fn with_component<H: ComponentHandler + 'static>(mut self, handler: H) -> Self {
        self.add(handler);
        self
    }

    /// Append a handler to the registry.
    pub fn add<H: ComponentHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    /// Handlers in registration order.
    #[must_use]
    pub fn handlers(&self) -> &[Box<dyn ComponentHandler>] {
        &self.handlers
    }

    /// Look up the first handler with the given name.
    ///
    /// Used for diagnostics and registry bookkeeping; dispatch during
    /// substitution is pattern-driven, not name-driven.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ComponentHandler> {
        self.handlers
            .iter()
            .find(|h| h.name() == name)
            .map(|h| h.as_ref())
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry has no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field(
                "handlers",
                &self.handlers.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
