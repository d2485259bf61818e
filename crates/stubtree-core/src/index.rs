//! Name lookup over a stub tree.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use stubtree_syntax::SyntaxKind;

use crate::stub::{StubId, StubTree};

/// Case-insensitive name index. Structured Text identifiers ignore case, so
/// `motor` finds a stub declared as `Motor`.
#[derive(Debug, Clone, Default)]
pub struct StubIndex {
    by_name: FxHashMap<SmolStr, Vec<StubId>>,
}

impl StubIndex {
    /// Indexes every name of every stub in `tree`.
    #[must_use]
    pub fn new(tree: &StubTree) -> Self {
        let mut by_name: FxHashMap<SmolStr, Vec<StubId>> = FxHashMap::default();
        for record in tree.records() {
            for name in &record.data().names {
                by_name.entry(normalize(name)).or_default().push(record.id());
            }
        }
        Self { by_name }
    }

    /// Stubs declaring `name`, in document order.
    #[must_use]
    pub fn lookup(&self, name: &str) -> &[StubId] {
        self.by_name
            .get(&normalize(name))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Stubs of `kind` declaring `name`.
    pub fn lookup_kind<'a>(
        &'a self,
        tree: &'a StubTree,
        name: &str,
        kind: SyntaxKind,
    ) -> impl Iterator<Item = StubId> + 'a {
        self.lookup(name)
            .iter()
            .copied()
            .filter(move |&id| tree[id].kind() == kind)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}

/// Dotted path of named ancestors down to `id`: `Lib.Motor.Start`.
#[must_use]
pub fn qualified_name(tree: &StubTree, id: StubId) -> SmolStr {
    let mut parts: Vec<&str> = tree
        .ancestors(id)
        .filter_map(|ancestor| tree[ancestor].name().map(SmolStr::as_str))
        .collect();
    parts.reverse();
    if let Some(name) = tree[id].name() {
        parts.push(name.as_str());
    }
    SmolStr::new(parts.join("."))
}

fn normalize(name: &str) -> SmolStr {
    SmolStr::new(name.to_ascii_uppercase())
}
