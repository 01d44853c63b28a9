// SPDX-License-Identifier: MIT OR Apache-2.0
use std::hash::{BuildHasher, Hash, Hasher};

use ahash::{AHashMap, AHashSet, RandomState};
use deepassert_core::{Mapping, Node, Path, PathSegment, numbers_equal};

use crate::error::DiffError;
use crate::model::{Diff, DiffItem, DiffKind};
use crate::operator::ComparisonOverride;

/// Default nesting limit for [`DiffOptions::max_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for [`DeepDiff`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Top-level mapping keys left out of the comparison
    pub ignore_keys: Vec<String>,
    /// Rendered paths (`root['a'][0]`) left out of the comparison
    pub exclude_paths: Vec<String>,
    /// Compare lists as multisets instead of by index
    pub ignore_order: bool,
    /// Deepest nesting level compared before giving up
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_keys: Vec::new(),
            exclude_paths: Vec::new(),
            ignore_order: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiffOptions {
    /// Ignore these top-level keys
    #[must_use]
    pub fn with_ignored_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Exclude these rendered paths
    #[must_use]
    pub fn with_excluded_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Compare lists without regard to element order
    #[must_use]
    pub const fn with_ignore_order(mut self, ignore_order: bool) -> Self {
        self.ignore_order = ignore_order;
        self
    }

    /// Set the nesting limit
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Structural comparison of an expected and an actual tree
///
/// Without operators the comparison is purely structural, so a marker only
/// equals an identical marker. Install a
/// [`MarkerOperator`](crate::MarkerOperator) to let markers match.
pub struct DeepDiff<'a> {
    expected: &'a Node,
    actual: &'a Node,
    options: DiffOptions,
    operators: Vec<Box<dyn ComparisonOverride + 'a>>,
}

impl<'a> DeepDiff<'a> {
    /// Prepare a comparison with default options and no operators
    #[must_use]
    pub fn new(expected: &'a Node, actual: &'a Node) -> Self {
        Self {
            expected,
            actual,
            options: DiffOptions::default(),
            operators: Vec::new(),
        }
    }

    /// Replace the options
    #[must_use]
    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// Install an override; overrides are consulted in installation order
    #[must_use]
    pub fn with_operator(mut self, operator: impl ComparisonOverride + 'a) -> Self {
        self.operators.push(Box::new(operator));
        self
    }

    /// Run the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::DepthLimitExceeded`] if the trees nest deeper than
    /// [`DiffOptions::max_depth`].
    pub fn compute(&self) -> Result<Diff, DiffError> {
        let excluded = self
            .options
            .exclude_paths
            .iter()
            .cloned()
            .chain(
                self.options
                    .ignore_keys
                    .iter()
                    .map(|key| Path::top_level_key(key.as_str()).to_string()),
            )
            .collect();
        let mut walk = Walk {
            operators: &self.operators,
            options: &self.options,
            excluded,
            hash_state: RandomState::new(),
            path: Path::root(),
            items: Vec::new(),
        };
        walk.compare(self.expected, self.actual, 0)?;
        Ok(Diff::new(walk.items))
    }
}

/// Bipartite pairing state for one unordered list comparison
struct Pairing<'n> {
    left: &'n [Node],
    right: &'n [Node],
    /// Compatible actual indices per expected index, filled on demand
    edges: Vec<Option<Vec<usize>>>,
    /// Expected index paired with each actual index
    partner: Vec<Option<usize>>,
    visited: Vec<bool>,
}

struct Walk<'w, 'a> {
    operators: &'w [Box<dyn ComparisonOverride + 'a>],
    options: &'w DiffOptions,
    excluded: AHashSet<String>,
    hash_state: RandomState,
    path: Path,
    items: Vec<DiffItem>,
}

impl Walk<'_, '_> {
    fn compare(&mut self, left: &Node, right: &Node, depth: usize) -> Result<(), DiffError> {
        if self.is_excluded() {
            return Ok(());
        }
        if depth > self.options.max_depth {
            return Err(DiffError::DepthLimitExceeded {
                path: self.path.to_string(),
                limit: self.options.max_depth,
            });
        }

        if let Some(operator) = self.operators.iter().find(|op| op.applies(left, right)) {
            if !operator.resolve(left, right) {
                let (pattern, value) = if left.as_marker().is_none() && right.as_marker().is_some()
                {
                    (right, left)
                } else {
                    (left, right)
                };
                self.record(DiffKind::PatternMismatch {
                    pattern: pattern.clone(),
                    value: value.clone(),
                });
            }
            return Ok(());
        }

        match (left, right) {
            (Node::Dict(l), Node::Dict(r)) => self.compare_dicts(l, r, depth),
            (Node::List(l), Node::List(r)) if self.options.ignore_order => {
                self.compare_unordered(l, r, depth)
            }
            (Node::List(l), Node::List(r)) => self.compare_ordered(l, r, depth),
            _ => {
                self.compare_leaves(left, right);
                Ok(())
            }
        }
    }

    fn compare_leaves(&mut self, left: &Node, right: &Node) {
        let equal = match (left, right) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => numbers_equal(a, b),
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Marker(a), Node::Marker(b)) => a == b,
            _ => {
                self.record(DiffKind::TypeChanged {
                    from: left.clone(),
                    to: right.clone(),
                });
                return;
            }
        };
        if !equal {
            self.record(DiffKind::ValueChanged {
                from: left.clone(),
                to: right.clone(),
            });
        }
    }

    fn compare_dicts(&mut self, left: &Mapping, right: &Mapping, depth: usize) -> Result<(), DiffError> {
        for (key, expected) in left {
            self.path.push(PathSegment::Key(key.clone()));
            let result = match right.get(key) {
                Some(actual) => self.compare(expected, actual, depth + 1),
                None => {
                    self.record_unless_excluded(DiffKind::DictItemRemoved {
                        value: expected.clone(),
                    });
                    Ok(())
                }
            };
            self.path.pop();
            result?;
        }
        for (key, actual) in right {
            if !left.contains_key(key) {
                self.path.push(PathSegment::Key(key.clone()));
                self.record_unless_excluded(DiffKind::DictItemAdded {
                    value: actual.clone(),
                });
                self.path.pop();
            }
        }
        Ok(())
    }

    fn compare_ordered(&mut self, left: &[Node], right: &[Node], depth: usize) -> Result<(), DiffError> {
        for index in 0..left.len().max(right.len()) {
            self.path.push(PathSegment::Index(index));
            let result = match (left.get(index), right.get(index)) {
                (Some(expected), Some(actual)) => self.compare(expected, actual, depth + 1),
                (Some(expected), None) => {
                    self.record_unless_excluded(DiffKind::ListItemRemoved {
                        value: expected.clone(),
                    });
                    Ok(())
                }
                (None, Some(actual)) => {
                    self.record_unless_excluded(DiffKind::ListItemAdded {
                        value: actual.clone(),
                    });
                    Ok(())
                }
                (None, None) => Ok(()),
            };
            self.path.pop();
            result?;
        }
        Ok(())
    }

    /// Pair elements as a multiset. Exact matches are found through
    /// fingerprints first; the remaining elements (markers, numbers differing
    /// only in representation) are paired by augmenting paths so that a
    /// marker never takes the only partner another element could use.
    /// Expected elements at excluded paths take no part in the pairing.
    fn compare_unordered(&mut self, left: &[Node], right: &[Node], depth: usize) -> Result<(), DiffError> {
        let mut buckets: AHashMap<u64, Vec<usize>> = AHashMap::new();
        for (j, actual) in right.iter().enumerate() {
            buckets.entry(self.fingerprint(actual)).or_default().push(j);
        }

        let mut pairing = Pairing {
            left,
            right,
            edges: vec![None; left.len()],
            partner: vec![None; right.len()],
            visited: vec![false; right.len()],
        };
        let mut candidates = Vec::with_capacity(left.len());
        for (i, expected) in left.iter().enumerate() {
            if self.excludes_index(i) {
                continue;
            }
            candidates.push(i);
            if let Some(bucket) = buckets.get(&self.fingerprint(expected)) {
                for &j in bucket {
                    if pairing.partner[j].is_none() && self.probe(i, expected, &right[j], depth)? {
                        pairing.partner[j] = Some(i);
                        break;
                    }
                }
            }
        }

        let mut paired_left = vec![false; left.len()];
        for i in pairing.partner.iter().flatten() {
            paired_left[*i] = true;
        }
        for &i in &candidates {
            if !paired_left[i] {
                pairing.visited.fill(false);
                self.augment(i, &mut pairing, depth)?;
            }
        }

        paired_left.fill(false);
        for i in pairing.partner.iter().flatten() {
            paired_left[*i] = true;
        }
        for i in candidates {
            if !paired_left[i] {
                self.path.push(PathSegment::Index(i));
                self.record(DiffKind::ListItemRemoved {
                    value: left[i].clone(),
                });
                self.path.pop();
            }
        }
        for (j, actual) in right.iter().enumerate() {
            if pairing.partner[j].is_none() {
                self.path.push(PathSegment::Index(j));
                self.record_unless_excluded(DiffKind::ListItemAdded {
                    value: actual.clone(),
                });
                self.path.pop();
            }
        }
        Ok(())
    }

    /// Find a partner for expected element `i`, re-pairing others along an
    /// augmenting path if needed
    fn augment(&mut self, i: usize, pairing: &mut Pairing<'_>, depth: usize) -> Result<bool, DiffError> {
        for j in self.compatible(i, pairing, depth)? {
            if pairing.visited[j] {
                continue;
            }
            pairing.visited[j] = true;
            let free = match pairing.partner[j] {
                None => true,
                Some(k) => self.augment(k, pairing, depth)?,
            };
            if free {
                pairing.partner[j] = Some(i);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Actual elements that expected element `i` compares equal to, memoized
    fn compatible(&mut self, i: usize, pairing: &mut Pairing<'_>, depth: usize) -> Result<Vec<usize>, DiffError> {
        if let Some(edges) = &pairing.edges[i] {
            return Ok(edges.clone());
        }
        let (left, right) = (pairing.left, pairing.right);
        let mut edges = Vec::new();
        for (j, actual) in right.iter().enumerate() {
            if self.probe(i, &left[i], actual, depth)? {
                edges.push(j);
            }
        }
        pairing.edges[i] = Some(edges.clone());
        Ok(edges)
    }

    fn excludes_index(&mut self, index: usize) -> bool {
        self.path.push(PathSegment::Index(index));
        let excluded = self.is_excluded();
        self.path.pop();
        excluded
    }

    /// Compare without keeping any recorded differences
    fn probe(&mut self, index: usize, expected: &Node, actual: &Node, depth: usize) -> Result<bool, DiffError> {
        let mark = self.items.len();
        self.path.push(PathSegment::Index(index));
        let result = self.compare(expected, actual, depth + 1);
        self.path.pop();
        result?;
        let equal = self.items.len() == mark;
        self.items.truncate(mark);
        Ok(equal)
    }

    fn fingerprint(&self, node: &Node) -> u64 {
        let mut hasher = self.hash_state.build_hasher();
        self.hash_node(node, &mut hasher);
        hasher.finish()
    }

    fn hash_node<H: Hasher>(&self, node: &Node, state: &mut H) {
        let node = self
            .operators
            .iter()
            .fold(node, |node, operator| operator.normalize_for_hashing(node));
        match node {
            Node::Null => 0_u8.hash(state),
            Node::Bool(b) => {
                1_u8.hash(state);
                b.hash(state);
            }
            Node::Number(n) => {
                2_u8.hash(state);
                n.as_f64().map(f64::to_bits).hash(state);
            }
            Node::String(s) => {
                3_u8.hash(state);
                s.hash(state);
            }
            Node::List(items) => {
                4_u8.hash(state);
                items.len().hash(state);
                for item in items {
                    self.hash_node(item, state);
                }
            }
            Node::Dict(map) => {
                5_u8.hash(state);
                map.len().hash(state);
                // entry order must not affect the fingerprint
                let entries = map.iter().fold(0_u64, |acc, (key, value)| {
                    let mut entry = self.hash_state.build_hasher();
                    key.hash(&mut entry);
                    self.hash_node(value, &mut entry);
                    acc.wrapping_add(entry.finish())
                });
                entries.hash(state);
            }
            Node::Marker(marker) => {
                6_u8.hash(state);
                marker.kind().hash(state);
            }
        }
    }

    fn is_excluded(&self) -> bool {
        !self.excluded.is_empty() && self.excluded.contains(&self.path.to_string())
    }

    fn record_unless_excluded(&mut self, kind: DiffKind) {
        if !self.is_excluded() {
            self.record(kind);
        }
    }

    fn record(&mut self, kind: DiffKind) {
        self.items.push(DiffItem {
            path: self.path.clone(),
            kind,
        });
    }
}
