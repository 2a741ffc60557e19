#![forbid(unsafe_code)]

//! Gesture fixture: a mounted controller on a [`MemoryDocument`].
//!
//! The fixture plays the host's part. It routes pointer input to the
//! controller, delivers the returned side effects (notification log, global
//! cursor, a JSONL trace of every dispatch), and re-renders the element tree
//! from the engine's state so the next measurement sees the new box.
//!
//! Default layout:
//!
//! ```text
//! body
//! └── div.stage            320x240 at (0, 0)
//!     └── div.rsz-container 200x120 at (0, 0)
//!         ├── div.content
//!         │   └── header.title
//!         └── span.rsz-handle.rsz-handle--{r,rb,...}
//! ```

use resizer_core::{
    CONTAINER_CLASS, CursorHint, Extent, GeometrySnapshot, HANDLE_CLASS, Handle, Length,
    Notification, NotificationKind, Point, PointerInput, Rect,
};
use resizer_engine::{CursorCommand, Dispatch, HostDocument, ResizableConfig, ResizeController};
use tracing::{debug, warn};

use crate::document::{MemoryDocument, NodeId};

/// Initial measurements of the fixture tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureLayout {
    /// Client size of the host's parent.
    pub parent: Extent,
    /// Page position of the parent.
    pub parent_origin: Point,
    /// Rendered size of the host before the engine styles it.
    pub host: Extent,
    /// Host position inside the parent before the engine styles it.
    pub host_offset: Point,
    /// Rendered-to-layout ratio applied to the host (a CSS `scale()`).
    pub scale: f64,
}

impl Default for FixtureLayout {
    fn default() -> Self {
        Self {
            parent: Extent::new(320.0, 240.0),
            parent_origin: Point::ZERO,
            host: Extent::new(200.0, 120.0),
            host_offset: Point::ZERO,
            scale: 1.0,
        }
    }
}

/// A controller mounted (or mountable) on an in-memory tree.
#[derive(Debug)]
pub struct Fixture {
    pub doc: MemoryDocument,
    pub controller: ResizeController<NodeId>,
    pub layout: FixtureLayout,
    pub parent: NodeId,
    pub host: NodeId,
    pub content: NodeId,
    pub title: NodeId,
    handles: Vec<(Handle, NodeId)>,
    notifications: Vec<Notification<NodeId>>,
    cursor: Option<CursorHint>,
    trace: Vec<String>,
}

impl Fixture {
    /// Build the default tree without mounting.
    #[must_use]
    pub fn new(config: ResizableConfig) -> Self {
        Self::with_layout(config, FixtureLayout::default())
    }

    /// Build the tree with explicit measurements, without mounting.
    #[must_use]
    pub fn with_layout(config: ResizableConfig, layout: FixtureLayout) -> Self {
        let mut doc = MemoryDocument::new();
        let parent = doc.create_element("div");
        doc.add_class(parent, "stage");
        doc.append_child(doc.root(), parent);

        let host = doc.create_element("div");
        doc.add_class(host, CONTAINER_CLASS);
        doc.append_child(parent, host);

        let content = doc.create_element("div");
        doc.add_class(content, "content");
        doc.append_child(host, content);

        let title = doc.create_element("header");
        doc.add_class(title, "title");
        doc.append_child(content, title);

        doc.set_size(parent, layout.parent);
        doc.set_offset(parent, layout.parent_origin);
        doc.set_bounding_rect(
            parent,
            Some(Rect::new(
                layout.parent_origin.x,
                layout.parent_origin.y,
                layout.parent.width,
                layout.parent.height,
            )),
        );

        let mut fixture = Self {
            doc,
            controller: ResizeController::new(config),
            layout,
            parent,
            host,
            content,
            title,
            handles: Vec::new(),
            notifications: Vec::new(),
            cursor: None,
            trace: Vec::new(),
        };
        fixture.place_host(layout.host, layout.host_offset);
        fixture.render_handles();
        fixture
    }

    /// Build the default tree and mount.
    #[must_use]
    pub fn mounted(config: ResizableConfig) -> Self {
        let mut fixture = Self::new(config);
        fixture.mount();
        fixture
    }

    pub fn mount(&mut self) -> Dispatch<NodeId> {
        let dispatch = self.controller.mount(&self.doc, self.host);
        self.deliver(dispatch)
    }

    pub fn unmount(&mut self) -> Dispatch<NodeId> {
        let dispatch = self.controller.unmount();
        self.deliver(dispatch)
    }

    /// Mouse press on an arbitrary element.
    pub fn press(&mut self, target: NodeId, x: f64, y: f64) -> Dispatch<NodeId> {
        let input = PointerInput::mouse(Some(target), x, y);
        let dispatch = self.controller.pointer_down(&self.doc, &input);
        self.deliver(dispatch)
    }

    /// Mouse press on a handle; a handle that is not rendered has no target.
    pub fn press_handle(&mut self, handle: Handle, x: f64, y: f64) -> Dispatch<NodeId> {
        let input = PointerInput::mouse(self.handle_node(handle), x, y);
        let dispatch = self.controller.pointer_down(&self.doc, &input);
        self.deliver(dispatch)
    }

    /// Touch press with the given touch list.
    pub fn touch_press(
        &mut self,
        target: NodeId,
        touches: impl IntoIterator<Item = Point>,
    ) -> Dispatch<NodeId> {
        let input = PointerInput::touch(Some(target), touches);
        let dispatch = self.controller.pointer_down(&self.doc, &input);
        self.deliver(dispatch)
    }

    /// Document-level mouse move.
    pub fn move_to(&mut self, x: f64, y: f64) -> Dispatch<NodeId> {
        let input = PointerInput::mouse(None, x, y);
        let dispatch = self.controller.pointer_move(&self.doc, &input);
        self.deliver(dispatch)
    }

    /// Document-level touch move.
    pub fn touch_move(&mut self, touches: impl IntoIterator<Item = Point>) -> Dispatch<NodeId> {
        let input = PointerInput::touch(None, touches);
        let dispatch = self.controller.pointer_move(&self.doc, &input);
        self.deliver(dispatch)
    }

    pub fn release(&mut self) -> Dispatch<NodeId> {
        let dispatch = self.controller.pointer_up();
        self.deliver(dispatch)
    }

    /// Press `handle` at `from`, move once to `to`, release.
    ///
    /// Returns the move dispatch.
    pub fn drag_handle(&mut self, handle: Handle, from: Point, to: Point) -> Dispatch<NodeId> {
        self.press_handle(handle, from.x, from.y);
        let moved = self.move_to(to.x, to.y);
        self.release();
        moved
    }

    /// Press `target` at `from`, move through `path`, release.
    pub fn drag_through(&mut self, target: NodeId, from: Point, path: &[Point]) {
        self.press(target, from.x, from.y);
        for point in path {
            self.move_to(point.x, point.y);
        }
        self.release();
    }

    pub fn trigger_maximize(&mut self, maximize: bool) -> Dispatch<NodeId> {
        let dispatch = self.controller.trigger_maximize(&self.doc, maximize);
        self.deliver(dispatch)
    }

    pub fn set_maximize(&mut self, maximize: bool) -> Dispatch<NodeId> {
        let dispatch = self.controller.set_maximize(&self.doc, maximize);
        self.deliver(dispatch)
    }

    pub fn sync_dimensions(&mut self) -> Dispatch<NodeId> {
        let dispatch = self.controller.sync_dimensions(&self.doc);
        self.deliver(dispatch)
    }

    /// Apply an edited copy of the current configuration.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut ResizableConfig)) -> Dispatch<NodeId> {
        let mut config = self.controller.config().clone();
        edit(&mut config);
        let dispatch = self.controller.update_config(&self.doc, config);
        self.deliver(dispatch)
    }

    /// Resize the parent's content box (a window resize, say).
    pub fn resize_parent(&mut self, extent: Extent) {
        self.layout.parent = extent;
        self.doc.set_size(self.parent, extent);
        let origin = self.layout.parent_origin;
        self.doc.set_bounding_rect(
            self.parent,
            Some(Rect::new(origin.x, origin.y, extent.width, extent.height)),
        );
    }

    /// Change the host's visual scale and re-render.
    pub fn set_scale(&mut self, scale: f64) {
        self.layout.scale = scale;
        self.render();
    }

    /// Add a class to an existing element.
    pub fn mark(&mut self, node: NodeId, class: &str) {
        self.doc.add_class(node, class);
    }

    /// Append a new element under `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let node = self.doc.create_element(tag);
        for class in classes {
            self.doc.add_class(node, class);
        }
        self.doc.append_child(parent, node);
        node
    }

    /// Element rendered for `handle`, if any.
    #[must_use]
    pub fn handle_node(&self, handle: Handle) -> Option<NodeId> {
        self.handles
            .iter()
            .find(|(rendered, _)| *rendered == handle)
            .map(|(_, node)| *node)
    }

    /// Handles currently present in the tree, in render order.
    #[must_use]
    pub fn rendered_handles(&self) -> Vec<Handle> {
        self.handles.iter().map(|(handle, _)| *handle).collect()
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification<NodeId>] {
        &self.notifications
    }

    #[must_use]
    pub fn notification_kinds(&self) -> Vec<NotificationKind> {
        self.notifications.iter().map(|note| note.kind).collect()
    }

    /// Drain the notification log.
    pub fn take_notifications(&mut self) -> Vec<Notification<NodeId>> {
        std::mem::take(&mut self.notifications)
    }

    /// Global cursor currently forced by a gesture.
    #[must_use]
    pub const fn cursor(&self) -> Option<CursorHint> {
        self.cursor
    }

    /// One JSON object per delivered dispatch.
    #[must_use]
    pub fn trace_jsonl(&self) -> String {
        let mut out = self.trace.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn snapshot(&self) -> GeometrySnapshot {
        self.controller.state().snapshot()
    }

    /// Numeric `[left, top, width, height]`; non-numeric fields read as NaN.
    #[must_use]
    pub fn box_px(&self) -> [f64; 4] {
        let state = self.controller.state();
        [
            state.left().as_px().unwrap_or(f64::NAN),
            state.top().as_px().unwrap_or(f64::NAN),
            state.width_px().unwrap_or(f64::NAN),
            state.height_px().unwrap_or(f64::NAN),
        ]
    }

    /// Inline style the host would carry right now.
    #[must_use]
    pub fn style(&self) -> String {
        self.controller.style().to_string()
    }

    fn deliver(&mut self, dispatch: Dispatch<NodeId>) -> Dispatch<NodeId> {
        match dispatch.cursor {
            Some(CursorCommand::Set(hint)) => self.cursor = Some(hint),
            Some(CursorCommand::Clear) => self.cursor = None,
            None => {}
        }
        self.notifications
            .extend(dispatch.notifications.iter().cloned());
        match serde_json::to_string(&dispatch) {
            Ok(line) => self.trace.push(line),
            Err(error) => warn!(%error, "dispatch not serializable"),
        }
        debug!(
            seq = self.trace.len(),
            phase = ?dispatch.log.phase,
            outcome = ?dispatch.log.outcome,
            "fixture delivered dispatch"
        );
        self.render();
        dispatch
    }

    /// Reflect the engine's box and handle set into the tree.
    fn render(&mut self) {
        let state = self.controller.state();
        let current = self.doc.layout_size(self.host);
        let size = Extent::new(
            state.width_px().unwrap_or(current.width),
            state.height_px().unwrap_or(current.height),
        );
        let offset = self.doc.offset_position(self.host);
        let origin = self.layout.parent_origin;
        let position = Point::new(
            px_or(state.left(), offset.x - origin.x),
            px_or(state.top(), offset.y - origin.y),
        );
        self.place_host(size, position);
        self.render_handles();
    }

    fn place_host(&mut self, size: Extent, position: Point) {
        let origin = self.layout.parent_origin;
        let scale = self.layout.scale;
        self.doc.set_size(self.host, size);
        self.doc.set_offset(
            self.host,
            Point::new(origin.x + position.x, origin.y + position.y),
        );
        self.doc.set_bounding_rect(
            self.host,
            Some(Rect::new(
                origin.x + position.x,
                origin.y + position.y,
                size.width * scale,
                size.height * scale,
            )),
        );
    }

    fn render_handles(&mut self) {
        let wanted = self.controller.rendered_handles().to_vec();
        let doc = &mut self.doc;
        self.handles.retain(|(handle, node)| {
            let keep = wanted.contains(handle);
            if !keep {
                doc.detach(*node);
            }
            keep
        });
        for handle in wanted.iter().copied() {
            if self.handle_node(handle).is_none() {
                let node = self.doc.create_element("span");
                self.doc.add_class(node, HANDLE_CLASS);
                self.doc.add_class(node, handle.class_name());
                self.doc.append_child(self.host, node);
                self.handles.push((handle, node));
            }
        }
        self.handles
            .sort_by_key(|(handle, _)| wanted.iter().position(|rendered| rendered == handle));
    }
}

fn px_or(length: &Length, fallback: f64) -> f64 {
    length.as_px().unwrap_or(fallback)
}
