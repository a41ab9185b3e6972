//! Indirect object table.
//!
//! Slots live in an arena and are addressed either by [`SlotId`] or by their
//! identity. Objects elsewhere in the graph refer to a slot only through a
//! [`PDFObjRef`], so there is exactly one copy of every indirect value.

use super::config::StoreParams;
use crate::error::Result;
use crate::model::indirect::IndirectObject;
use crate::model::objects::{PDFDict, PDFObjRef, PDFObject};
use crate::model::visitor::RefCollector;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Anything that can look up indirect objects by identity.
pub trait ObjectResolver {
    /// Value currently held for `objref`, if any.
    fn lookup(&self, objref: PDFObjRef) -> Option<&PDFObject>;

    /// Bound on reference chains followed by [`resolve`](Self::resolve).
    fn max_resolve_depth(&self) -> usize {
        super::config::DEFAULT_MAX_RESOLVE_DEPTH
    }

    /// Follow references starting at `obj` until a concrete value.
    ///
    /// Concrete values are returned unchanged. Dangling references, empty
    /// slots, cycles and chains longer than the depth bound give `None`.
    fn resolve<'a>(&'a self, obj: &'a PDFObject) -> Option<&'a PDFObject> {
        let mut current = obj;
        let mut seen = FxHashSet::default();
        while let PDFObject::Ref(objref) = current {
            if !seen.insert(*objref) {
                tracing::warn!(%objref, "circular reference");
                return None;
            }
            if seen.len() > self.max_resolve_depth() {
                tracing::warn!(%objref, "reference chain too deep");
                return None;
            }
            current = match self.lookup(*objref) {
                Some(next) => next,
                None => {
                    tracing::debug!(%objref, "unresolved reference");
                    return None;
                }
            };
        }
        Some(current)
    }
}

/// Resolver for values that live outside any store: every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl ObjectResolver for NoResolver {
    fn lookup(&self, _objref: PDFObjRef) -> Option<&PDFObject> {
        None
    }
}

/// Index of a slot in an [`ObjectStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Arena of indirect object slots keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    params: StoreParams,
    slots: Vec<IndirectObject>,
    index: FxHashMap<PDFObjRef, SlotId>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::with_params(StoreParams::default())
    }

    pub fn with_params(params: StoreParams) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(params.initial_capacity);
        Self {
            slots: Vec::with_capacity(params.initial_capacity),
            index,
            params,
        }
    }

    pub const fn params(&self) -> &StoreParams {
        &self.params
    }

    /// Slot for `objref`, created empty if this identity is new.
    pub fn reserve(&mut self, objref: PDFObjRef) -> SlotId {
        if let Some(&id) = self.index.get(&objref) {
            return id;
        }
        let id = SlotId(self.slots.len());
        self.slots
            .push(IndirectObject::with_id(objref.objid, objref.genno));
        self.index.insert(objref, id);
        tracing::debug!(%objref, slot = id.0, "new slot");
        id
    }

    /// Record a definition of `objref`.
    ///
    /// The first definition fills the slot; later ones are merged into it
    /// (see [`IndirectObject::substitute`]). On error the slot keeps its
    /// previous value.
    pub fn define(&mut self, objref: PDFObjRef, value: PDFObject) -> Result<SlotId> {
        let id = self.reserve(objref);
        self.slots[id.0].substitute(value)?;
        Ok(id)
    }

    pub fn slot_id(&self, objref: PDFObjRef) -> Option<SlotId> {
        self.index.get(&objref).copied()
    }

    /// Slot behind an id handed out by this store.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different store with fewer slots.
    pub fn slot(&self, id: SlotId) -> &IndirectObject {
        &self.slots[id.0]
    }

    /// Mutable slot behind an id handed out by this store.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different store with fewer slots.
    pub fn slot_mut(&mut self, id: SlotId) -> &mut IndirectObject {
        &mut self.slots[id.0]
    }

    pub fn get(&self, objref: PDFObjRef) -> Option<&IndirectObject> {
        self.slot_id(objref).map(|id| self.slot(id))
    }

    pub fn get_mut(&mut self, objref: PDFObjRef) -> Option<&mut IndirectObject> {
        let id = self.slot_id(objref)?;
        Some(self.slot_mut(id))
    }

    /// Dictionary held by `objref`, for wrapping in a typed view.
    pub fn get_dict(&self, objref: PDFObjRef) -> Option<&PDFDict> {
        match self.get(objref)?.resolve()? {
            PDFObject::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn get_dict_mut(&mut self, objref: PDFObjRef) -> Option<&mut PDFDict> {
        self.get_mut(objref)?.referent_dict_mut()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &IndirectObject> {
        self.slots.iter()
    }

    /// Identities reachable from `root`, breadth first, each listed once.
    ///
    /// Includes `root` itself when it is a reference. Dangling references are
    /// listed but not expanded.
    pub fn reachable(&self, root: &PDFObject) -> Result<Vec<PDFObjRef>> {
        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        let mut collector = RefCollector::new();
        root.accept(&mut collector)?;
        queue.extend(collector.into_refs());

        while let Some(objref) = queue.pop_front() {
            if !seen.insert(objref) {
                continue;
            }
            order.push(objref);
            if let Some(slot) = self.get(objref) {
                let mut collector = RefCollector::new();
                slot.accept(&mut collector)?;
                queue.extend(collector.into_refs());
            }
        }
        Ok(order)
    }
}

impl ObjectResolver for ObjectStore {
    fn lookup(&self, objref: PDFObjRef) -> Option<&PDFObject> {
        self.get(objref)?.resolve()
    }

    fn max_resolve_depth(&self) -> usize {
        self.params.max_resolve_depth
    }
}
