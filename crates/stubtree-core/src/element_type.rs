//! Stub element types: the capability a node kind implements to take part
//! in stub building.

use std::fmt;

use stubtree_syntax::ast::{AstNode, Declaration, VarDecl};
use stubtree_syntax::{SyntaxKind, SyntaxNode};

use crate::stub::{StubData, StubRecord};

/// Stub capability of an element type.
///
/// Implementations are registered per `SyntaxKind` in a
/// [`StubTypeRegistry`](crate::StubTypeRegistry). They must be free of side
/// effects: the same registry is shared by builds running on other threads.
pub trait StubElementType: Send + Sync + fmt::Debug {
    /// Decides whether `node` gets a stub. Declining does not prune the
    /// node's children.
    fn should_create_stub(&self, node: &SyntaxNode) -> bool {
        let _ = node;
        true
    }

    /// Builds the stub data for `declaration`, placed under `parent`.
    fn create_stub(&self, declaration: &Declaration, parent: &StubRecord) -> StubData;
}

/// Stub type for POUs, namespaces, types and other named declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationStubType;

impl StubElementType for DeclarationStubType {
    fn create_stub(&self, declaration: &Declaration, _parent: &StubRecord) -> StubData {
        StubData::from_declaration(declaration)
    }
}

/// Stub type for enum values. Values record their enum's name as type.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumValueStubType;

impl StubElementType for EnumValueStubType {
    fn create_stub(&self, declaration: &Declaration, parent: &StubRecord) -> StubData {
        let mut data = StubData::from_declaration(declaration);
        if data.type_ref.is_none() && parent.kind() == SyntaxKind::TypeDecl {
            data.type_ref = parent.name().cloned();
        }
        data
    }
}

/// Stub type for variable declarations. `VAR_TEMP` variables only live for
/// one call and are not indexed.
#[derive(Debug, Clone, Copy, Default)]
pub struct VarDeclStubType;

impl StubElementType for VarDeclStubType {
    fn should_create_stub(&self, node: &SyntaxNode) -> bool {
        let section = VarDecl::cast(node.clone())
            .and_then(|decl| decl.var_block())
            .and_then(|block| block.section());
        section != Some(SyntaxKind::KwVarTemp)
    }

    fn create_stub(&self, declaration: &Declaration, _parent: &StubRecord) -> StubData {
        StubData::from_declaration(declaration)
    }
}
