//! The container driver.
//!
//! A [`Container`] owns its children and their declarations and drives the
//! two passes a host runs per frame:
//!
//! 1. [`Container::measure`] offers available space, clears last pass's
//!    results if anything changed, and resolves the container's own size.
//! 2. [`Container::layout`] walks participating children in insertion order
//!    and hands each one its resolved rectangle.
//!
//! The driver decides *when* to re-resolve: any structural change through
//! `&mut self` marks the container dirty, and the next measure pass clears
//! every box. Nothing tracks which value depends on which.

use std::fmt;

use tether_core::geometry::{Rect, Size};
use tether_core::scalar::{XInt, YInt};
use tether_core::{debug, debug_span, trace};

use crate::axis::{Horizontal, Vertical};
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::measure::Measurable;
use crate::parent::{ParentGeometry, SizeStrategy};
use crate::scope::{BoxId, ChildLookup, ContainerId, LayoutScope};
use crate::solver::Solver;
use crate::spec::LayoutSpec;

/// Lifecycle of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerState {
    /// Created; the initializer has not run.
    #[default]
    Unattached,
    /// The initializer is running.
    Initializing,
    /// Declarations are in place; sizes resolve on demand.
    Measuring,
    /// The last layout pass committed every participating child.
    LaidOut,
}

/// Callback that declares the children's layouts, run once on attach.
pub type Initializer<N> = Box<dyn FnOnce(&mut Container<N>) -> Result<(), LayoutError>>;

struct Child<N> {
    node: N,
    spec: Option<LayoutSpec>,
}

/// Child slots. Removed children leave a hole so ids stay stable.
struct Children<N> {
    container: ContainerId,
    slots: Vec<Option<Child<N>>>,
}

impl<N> Children<N> {
    fn get(&self, id: BoxId) -> Result<&Child<N>, LayoutError> {
        if id.container() != self.container {
            return Err(LayoutError::IllegalReference { node: id });
        }
        self.slots
            .get(id.index() as usize)
            .and_then(Option::as_ref)
            .ok_or(LayoutError::IllegalReference { node: id })
    }

    fn get_mut(&mut self, id: BoxId) -> Result<&mut Child<N>, LayoutError> {
        if id.container() != self.container {
            return Err(LayoutError::IllegalReference { node: id });
        }
        self.slots
            .get_mut(id.index() as usize)
            .and_then(Option::as_mut)
            .ok_or(LayoutError::IllegalReference { node: id })
    }

    fn ids(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| BoxId::new(self.container, index as u32))
    }
}

impl<N: Measurable> ChildLookup for Children<N> {
    fn entry(&self, id: BoxId) -> Result<(&LayoutSpec, &dyn Measurable), LayoutError> {
        let child = self.get(id)?;
        let spec = child
            .spec
            .as_ref()
            .ok_or(LayoutError::NotAttached { node: Some(id) })?;
        Ok((spec, &child.node))
    }

    fn child_ids(&self) -> Vec<BoxId> {
        self.ids().collect()
    }
}

/// A box whose children are positioned by lazily resolved declarations.
///
/// # Example
///
/// ```
/// use tether_core::{Rect, Size};
/// use tether_layout::dsl::{left_to, top_to};
/// use tether_layout::{Container, LayoutConfig, MeasureSpec, Measured};
///
/// let mut container = Container::new(LayoutConfig::new());
/// let label = container.add_child(|w: MeasureSpec, h: MeasureSpec| {
///     Measured::new(w.apply(40), h.apply(10))
/// });
/// container
///     .apply_layout(
///         label,
///         left_to(|s| s.parent().left()).right_to(|s| s.parent().right()),
///         top_to(|s| Ok(s.parent().top()? + 5)),
///     )
///     .unwrap();
///
/// assert_eq!(container.measure(Size::new(200, 50)).unwrap(), Size::new(200, 50));
/// let mut placed = Vec::new();
/// container.layout(|id, _, rect| placed.push((id, rect))).unwrap();
/// assert_eq!(placed, vec![(label, Rect::new(0, 5, 200, 10))]);
/// ```
pub struct Container<N> {
    id: ContainerId,
    config: LayoutConfig,
    children: Children<N>,
    geometry: ParentGeometry,
    state: ContainerState,
    initializer: Option<Initializer<N>>,
    last_available: Option<Size>,
    dirty: bool,
}

impl<N> fmt::Debug for Container<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("children", &self.children.ids().count())
            .field("state", &self.state)
            .field("last_available", &self.last_available)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<N: Measurable> Container<N> {
    /// Create an empty container.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        let id = ContainerId::next();
        Self {
            id,
            config,
            children: Children {
                container: id,
                slots: Vec::new(),
            },
            geometry: ParentGeometry::new(),
            state: ContainerState::Unattached,
            initializer: None,
            last_available: None,
            dirty: true,
        }
    }

    /// Create a container whose children are declared by `init` on attach.
    #[must_use]
    pub fn with_initializer<F>(config: LayoutConfig, init: F) -> Self
    where
        F: FnOnce(&mut Container<N>) -> Result<(), LayoutError> + 'static,
    {
        let mut container = Self::new(config);
        container.initializer = Some(Box::new(init));
        container
    }

    /// Run the initializer. Later calls are no-ops.
    ///
    /// [`measure`](Self::measure) attaches implicitly. An initializer error is
    /// returned and the initializer is not retried.
    pub fn attach(&mut self) -> Result<(), LayoutError> {
        if self.state != ContainerState::Unattached {
            return Ok(());
        }
        self.state = ContainerState::Initializing;
        if let Some(init) = self.initializer.take() {
            debug!(container = %self.id, "running initializer");
            init(self)?;
        }
        self.state = ContainerState::Measuring;
        self.dirty = true;
        Ok(())
    }

    /// This container's identity.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.dirty = true;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ContainerState {
        self.state
    }

    // ── Children ────────────────────────────────────────────────────────

    /// Add a child. It takes part in layout once a layout is applied.
    pub fn add_child(&mut self, node: N) -> BoxId {
        let id = BoxId::new(self.id, self.children.slots.len() as u32);
        self.children.slots.push(Some(Child { node, spec: None }));
        self.dirty = true;
        id
    }

    /// Remove a child and return it. Its id becomes an illegal reference.
    pub fn remove_child(&mut self, id: BoxId) -> Result<N, LayoutError> {
        self.children.get(id)?;
        let child = self.children.slots[id.index() as usize]
            .take()
            .ok_or(LayoutError::IllegalReference { node: id })?;
        self.dirty = true;
        Ok(child.node)
    }

    /// Live children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.children.ids()
    }

    /// The child's node.
    #[must_use]
    pub fn node(&self, id: BoxId) -> Option<&N> {
        self.children.get(id).ok().map(|child| &child.node)
    }

    /// Mutable access to the child's node. Marks the container dirty.
    pub fn node_mut(&mut self, id: BoxId) -> Option<&mut N> {
        let child = self.children.get_mut(id).ok()?;
        self.dirty = true;
        Some(&mut child.node)
    }

    /// Attach both axis declarations to a child, replacing any earlier ones.
    pub fn apply_layout(
        &mut self,
        id: BoxId,
        x: impl Into<Solver<Horizontal>>,
        y: impl Into<Solver<Vertical>>,
    ) -> Result<(), LayoutError> {
        let child = self.children.get_mut(id)?;
        child.spec = Some(LayoutSpec::new(id, x.into(), y.into()));
        self.dirty = true;
        Ok(())
    }

    /// Replace one or both axis declarations of an already laid-out child.
    pub fn update_layout(
        &mut self,
        id: BoxId,
        x: Option<Solver<Horizontal>>,
        y: Option<Solver<Vertical>>,
    ) -> Result<(), LayoutError> {
        let child = self.children.get_mut(id)?;
        let previous = child
            .spec
            .take()
            .ok_or(LayoutError::NotAttached { node: Some(id) })?;
        let (old_x, old_y) = previous.into_parts();
        let spec = LayoutSpec::new(id, x.unwrap_or(old_x), y.unwrap_or(old_y));
        spec.clear();
        child.spec = Some(spec);
        self.dirty = true;
        Ok(())
    }

    // ── Own size ────────────────────────────────────────────────────────

    /// Derive the width from the available width.
    pub fn width_of<F>(&mut self, f: F)
    where
        F: Fn(&LayoutScope<'_>, XInt) -> Result<XInt, LayoutError> + 'static,
    {
        self.set_width(SizeStrategy::Custom(Box::new(
            move |scope: &LayoutScope<'_>, available: i32| f(scope, XInt(available)).map(XInt::value),
        )));
    }

    /// Derive the height from the available height.
    pub fn height_of<F>(&mut self, f: F)
    where
        F: Fn(&LayoutScope<'_>, YInt) -> Result<YInt, LayoutError> + 'static,
    {
        self.set_height(SizeStrategy::Custom(Box::new(
            move |scope: &LayoutScope<'_>, available: i32| f(scope, YInt(available)).map(YInt::value),
        )));
    }

    /// Take the full available width (the default).
    pub fn width_match_parent(&mut self) {
        self.set_width(SizeStrategy::MatchParent);
    }

    /// Shrink the width to fit the children plus padding.
    pub fn width_wrap_content(&mut self) {
        self.set_width(SizeStrategy::WrapContent);
    }

    /// Take the full available height (the default).
    pub fn height_match_parent(&mut self) {
        self.set_height(SizeStrategy::MatchParent);
    }

    /// Shrink the height to fit the children plus padding.
    pub fn height_wrap_content(&mut self) {
        self.set_height(SizeStrategy::WrapContent);
    }

    fn set_width(&mut self, strategy: SizeStrategy) {
        self.geometry.width.set_strategy(strategy);
        self.dirty = true;
    }

    fn set_height(&mut self, strategy: SizeStrategy) {
        self.geometry.height.set_strategy(strategy);
        self.dirty = true;
    }

    // ── Passes ──────────────────────────────────────────────────────────

    /// Force the next measure pass to clear every resolved value.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Query handle for resolved values.
    #[must_use]
    pub fn scope(&self) -> LayoutScope<'_> {
        LayoutScope::new(&self.children, &self.geometry, &self.config)
    }

    /// Resolved rectangle of a child, without re-measuring it.
    pub fn rect(&self, id: BoxId) -> Result<Rect, LayoutError> {
        let scope = self.scope();
        Ok(Rect::from_ltrb(
            scope.left(id)?.value(),
            scope.top(id)?.value(),
            scope.right(id)?.value(),
            scope.bottom(id)?.value(),
        ))
    }

    /// Offer `available` space and resolve the container's own size.
    pub fn measure(&mut self, available: Size) -> Result<Size, LayoutError> {
        let span = debug_span!(
            "tether.measure",
            container = %self.id,
            width = available.width,
            height = available.height
        );
        let _guard = span.enter();

        if self.state == ContainerState::Unattached {
            self.attach()?;
        }
        if self.dirty || self.last_available != Some(available) {
            self.clear();
        }
        self.geometry.set_available(available);
        self.last_available = Some(available);
        self.state = ContainerState::Measuring;

        let result = self.resolve_size();
        // A failed pass leaves partial results behind; start over next time.
        self.dirty = result.is_err();
        result
    }

    fn resolve_size(&self) -> Result<Size, LayoutError> {
        let parent = self.scope().parent();
        let width = parent.width()?.value();
        let height = parent.height()?.value();
        debug!(container = %self.id, width, height, "container measured");
        Ok(Size::new(width, height))
    }

    /// Commit every participating child's rectangle through `apply`.
    ///
    /// Children are visited in insertion order; `Gone` children are skipped.
    /// Requires a preceding [`measure`](Self::measure).
    pub fn layout<F>(&mut self, mut apply: F) -> Result<(), LayoutError>
    where
        F: FnMut(BoxId, &N, Rect),
    {
        let span = debug_span!("tether.layout", container = %self.id);
        let _guard = span.enter();

        let scope = self.scope();
        for id in self.children.ids() {
            let child = self.children.get(id)?;
            if !child.node.visibility().is_participating() {
                trace!(node = %id, "skipped; not participating");
                continue;
            }
            let rect = scope.commit(id)?;
            trace!(node = %id, ?rect, "committed");
            apply(id, &child.node, rect);
        }
        self.state = ContainerState::LaidOut;
        Ok(())
    }

    fn clear(&self) {
        for child in self.children.slots.iter().flatten() {
            if let Some(spec) = &child.spec {
                spec.clear();
            }
        }
        self.geometry.clear();
        debug!(container = %self.id, "cleared resolved values");
    }
}
