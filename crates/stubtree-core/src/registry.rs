//! Mapping from element type to stub capability.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use stubtree_syntax::SyntaxKind;

use crate::element_type::{
    DeclarationStubType, EnumValueStubType, StubElementType, VarDeclStubType,
};

static STRUCTURED_TEXT: Lazy<StubTypeRegistry> = Lazy::new(StubTypeRegistry::structured_text);

/// Registry of the element types that can create stubs.
///
/// A kind without an entry never creates a stub; its children are still
/// visited.
#[derive(Debug, Clone, Default)]
pub struct StubTypeRegistry {
    types: FxHashMap<SyntaxKind, Arc<dyn StubElementType>>,
}

impl StubTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Structured Text stub types.
    #[must_use]
    pub fn structured_text() -> Self {
        let mut registry = Self::new();
        for kind in [
            SyntaxKind::Namespace,
            SyntaxKind::Program,
            SyntaxKind::Function,
            SyntaxKind::FunctionBlock,
            SyntaxKind::Class,
            SyntaxKind::Interface,
            SyntaxKind::Method,
            SyntaxKind::Property,
            SyntaxKind::Action,
            SyntaxKind::TypeDecl,
        ] {
            registry.register(kind, DeclarationStubType);
        }
        registry.register(SyntaxKind::EnumValue, EnumValueStubType);
        registry.register(SyntaxKind::VarDecl, VarDeclStubType);
        registry
    }

    /// The shared read-only registry with the built-in stub types.
    #[must_use]
    pub fn global() -> &'static StubTypeRegistry {
        &STRUCTURED_TEXT
    }

    /// Registers `stub_type` for `kind`, returning the entry it replaces.
    pub fn register(
        &mut self,
        kind: SyntaxKind,
        stub_type: impl StubElementType + 'static,
    ) -> Option<Arc<dyn StubElementType>> {
        self.types.insert(kind, Arc::new(stub_type))
    }

    /// Removes the entry for `kind`.
    pub fn unregister(&mut self, kind: SyntaxKind) -> Option<Arc<dyn StubElementType>> {
        self.types.remove(&kind)
    }

    /// The stub capability of `kind`, if it has one.
    #[must_use]
    pub fn stub_type(&self, kind: SyntaxKind) -> Option<&dyn StubElementType> {
        self.types.get(&kind).map(|stub_type| &**stub_type)
    }

    /// Returns `true` if `kind` has a stub capability.
    #[must_use]
    pub fn is_stub_kind(&self, kind: SyntaxKind) -> bool {
        self.types.contains_key(&kind)
    }

    /// Registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<SyntaxKind> {
        let mut kinds: Vec<_> = self.types.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}
