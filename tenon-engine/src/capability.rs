//! Sequence/scalar classification of field types.
//!
//! Classification works from locally visible name and import information,
//! not a type system: the bare type name is resolved through the unit's
//! imports (exact last-segment match first, wildcard prefixes second) and
//! looked up in a table of known collection types. An unresolvable name
//! classifies as [`Capability::Scalar`], never an error. This mirrors the
//! original best-effort behavior: a locally defined or unimported sequence
//! type will not be recognized as one.

use indexmap::IndexMap;
use tenon_ir::{Import, TypeRef};

/// The shape of sequence a type provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    List,
    Set,
    Deque,
    Queue,
    /// `Collection` and other ordered-capable supertypes.
    General,
}

/// What a field's declared type structurally offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Scalar,
    Sequence(SequenceKind),
}

impl Capability {
    pub fn is_sequence(&self) -> bool {
        matches!(self, Capability::Sequence(_))
    }

    pub fn is_set_like(&self) -> bool {
        matches!(self, Capability::Sequence(SequenceKind::Set))
    }
}

/// Pluggable classification strategy.
///
/// The production implementation may consult a real type index; tests use a
/// fixed table. Implementations must not fail: unknown is `Scalar`.
pub trait CapabilityResolver {
    fn classify(&self, ty: &TypeRef, imports: &[Import]) -> Capability;
}

/// Default resolver backed by a table of JDK collection types.
#[derive(Debug, Clone)]
pub struct ImportTableResolver {
    table: IndexMap<String, SequenceKind>,
}

impl ImportTableResolver {
    pub fn new() -> Self {
        let mut table = IndexMap::new();
        for (name, kind) in [
            ("java.util.Collection", SequenceKind::General),
            ("java.util.List", SequenceKind::List),
            ("java.util.ArrayList", SequenceKind::List),
            ("java.util.LinkedList", SequenceKind::List),
            ("java.util.Vector", SequenceKind::List),
            ("java.util.Stack", SequenceKind::List),
            ("java.util.Set", SequenceKind::Set),
            ("java.util.HashSet", SequenceKind::Set),
            ("java.util.LinkedHashSet", SequenceKind::Set),
            ("java.util.TreeSet", SequenceKind::Set),
            ("java.util.SortedSet", SequenceKind::Set),
            ("java.util.NavigableSet", SequenceKind::Set),
            ("java.util.EnumSet", SequenceKind::Set),
            ("java.util.Deque", SequenceKind::Deque),
            ("java.util.ArrayDeque", SequenceKind::Deque),
            ("java.util.Queue", SequenceKind::Queue),
            ("java.util.PriorityQueue", SequenceKind::Queue),
            ("java.util.concurrent.CopyOnWriteArrayList", SequenceKind::List),
            ("java.util.concurrent.CopyOnWriteArraySet", SequenceKind::Set),
            ("java.util.concurrent.ConcurrentLinkedQueue", SequenceKind::Queue),
            ("java.util.concurrent.ConcurrentLinkedDeque", SequenceKind::Deque),
        ] {
            table.insert(name.to_string(), kind);
        }
        Self { table }
    }

    /// Extend the table with an additional known sequence type.
    pub fn with_type(mut self, qualified_name: impl Into<String>, kind: SequenceKind) -> Self {
        self.table.insert(qualified_name.into(), kind);
        self
    }

    fn lookup(&self, qualified: &str) -> Option<SequenceKind> {
        self.table.get(qualified).copied()
    }
}

impl Default for ImportTableResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityResolver for ImportTableResolver {
    fn classify(&self, ty: &TypeRef, imports: &[Import]) -> Capability {
        // Already-qualified references skip import resolution.
        if ty.name.contains('.') {
            return match self.lookup(&ty.name) {
                Some(kind) => Capability::Sequence(kind),
                None => Capability::Scalar,
            };
        }

        let bare = ty.bare_name();
        for import in imports {
            if !import.is_wildcard && !import.is_static && import.last_segment() == bare {
                return match self.lookup(&import.path) {
                    Some(kind) => Capability::Sequence(kind),
                    None => Capability::Scalar,
                };
            }
        }
        for import in imports {
            if import.is_wildcard && !import.is_static {
                let candidate = format!("{}.{}", import.path, bare);
                if let Some(kind) = self.lookup(&candidate) {
                    return Capability::Sequence(kind);
                }
            }
        }
        Capability::Scalar
    }
}
