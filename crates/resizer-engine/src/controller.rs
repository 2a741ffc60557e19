#![forbid(unsafe_code)]

//! Interaction controller: owns the geometry state of one container.
//!
//! The host forwards document-level pointer events (capture phase, so a
//! gesture keeps being observed after the pointer leaves the container) and
//! configuration changes. Every call returns a [`Dispatch`] carrying the
//! notifications to emit and the cursor/default-action side effects to
//! perform.
//!
//! ```text
//! Idle --pointer_down(handle)--> Resizing(edges) --pointer_move*--> ... --pointer_up--> Idle
//! Idle --pointer_down(drag)----> Dragging -------- pointer_move*--> ... --pointer_up--> Idle
//! ```
//!
//! `unmount` ends an open gesture without an end notification.

use std::fmt::Debug;

use resizer_core::{
    HANDLE_CLASS, Handle, Hotspot, Length, Notification, NotificationKind, PointerInput, debug,
    warn,
};

use crate::classify::HotspotScan;
use crate::config::ResizableConfig;
use crate::dispatch::{CursorCommand, Dispatch, IgnoredReason, LifecyclePhase};
use crate::host::HostDocument;
use crate::state::{GeometryState, InteractionMode};
use crate::style::StyleProjection;
use crate::sync::parent_extent;

/// Resize/drag engine for one container element.
#[derive(Debug, Clone)]
pub struct ResizeController<N> {
    pub(crate) config: ResizableConfig,
    pub(crate) state: GeometryState,
    pub(crate) host: Option<N>,
    pub(crate) drag_regions: Vec<N>,
}

impl<N: Copy + Eq + Debug> ResizeController<N> {
    /// Create an unmounted controller.
    #[must_use]
    pub fn new(config: ResizableConfig) -> Self {
        Self {
            state: GeometryState::from_config(&config),
            config,
            host: None,
            drag_regions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ResizableConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &GeometryState {
        &self.state
    }

    #[must_use]
    pub const fn host(&self) -> Option<N> {
        self.host
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    /// Elements currently marked as drag initiators.
    #[must_use]
    pub fn drag_regions(&self) -> &[N] {
        &self.drag_regions
    }

    /// Current style projection.
    #[must_use]
    pub fn style(&self) -> StyleProjection {
        self.state.style()
    }

    /// Handles the host should render; none while maximized.
    #[must_use]
    pub fn rendered_handles(&self) -> &[Handle] {
        if self.config.maximize || self.state.is_maximized() {
            &[]
        } else {
            &self.config.active
        }
    }

    /// Class lists for the rendered handle elements.
    #[must_use]
    pub fn handle_classes(&self) -> Vec<(Handle, [&'static str; 2])> {
        self.rendered_handles()
            .iter()
            .map(|handle| (*handle, [HANDLE_CLASS, handle.class_name()]))
            .collect()
    }

    /// Attach to `host`: synchronize dimensions, mark drag regions, build the
    /// axis mask and apply the initial maximize flag.
    pub fn mount<D>(&mut self, doc: &D, host: N) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        if self.host.is_some() {
            return finish(Dispatch::ignored(
                LifecyclePhase::Mount,
                IgnoredReason::AlreadyMounted,
                mode,
            ));
        }
        for advisory in self.config.validate() {
            warn!(advisory = %advisory, "resizer config advisory");
        }

        self.host = Some(host);
        if let Err(reason) = self.sync_box(doc) {
            debug!(?reason, "dimension sync skipped at mount");
        }
        self.refresh_drag_regions(doc);
        self.state.axis_mask = self.config.axis_mask();
        if self.config.maximize
            && let Err(reason) = self.apply_maximize(doc, true)
        {
            debug!(?reason, "initial maximize skipped");
        }

        let mut dispatch = Dispatch::applied(LifecyclePhase::Mount, mode);
        dispatch
            .notifications
            .push(self.notification(host, NotificationKind::Mount));
        if self.config.maximize {
            dispatch.notifications.push(Notification::maximize(
                true,
                self.state.snapshot(),
                host,
            ));
        }
        finish(dispatch)
    }

    /// Detach from the host. An open gesture ends silently.
    pub fn unmount(&mut self) -> Dispatch<N> {
        let mode = self.state.mode;
        let Some(host) = self.host.take() else {
            return finish(Dispatch::ignored(
                LifecyclePhase::Unmount,
                IgnoredReason::NotMounted,
                mode,
            ));
        };

        let mut dispatch = Dispatch::applied(LifecyclePhase::Unmount, mode);
        if !self.state.end_gesture().is_idle() {
            dispatch.cursor = Some(CursorCommand::Clear);
        }
        dispatch.log.mode_after = self.state.mode;
        dispatch
            .notifications
            .push(self.notification(host, NotificationKind::Destroy));
        self.drag_regions.clear();
        finish(dispatch)
    }

    /// Pointer-down anywhere in the document.
    ///
    /// Starts a resize when the target is inside one of the rendered handles,
    /// or a drag when it is inside a drag region. A press while a gesture is
    /// already open restarts it from the new hotspot.
    pub fn pointer_down<D>(&mut self, doc: &D, event: &PointerInput<N>) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        let ignore =
            |reason| finish(Dispatch::ignored(LifecyclePhase::PointerDown, reason, mode));

        let Some(host) = self.host else {
            return ignore(IgnoredReason::NotMounted);
        };
        let Some(target) = event.target else {
            return ignore(IgnoredReason::TargetMissing);
        };
        let scan = HotspotScan {
            host,
            handles: self.rendered_handles(),
            drag_regions: &self.drag_regions,
        };
        let hotspot = match scan.classify(doc, target) {
            Ok(hotspot) => hotspot,
            Err(reason) => return ignore(reason),
        };
        let Some(position) = event.position() else {
            return ignore(IgnoredReason::NoPointerPosition);
        };

        let next = match hotspot {
            Hotspot::Handle(handle) => InteractionMode::Resizing(handle.edges()),
            Hotspot::DragRegion => InteractionMode::Dragging,
        };
        self.state.begin_gesture(next, position, parent_extent(doc, host));

        let mut dispatch = Dispatch::applied(LifecyclePhase::PointerDown, mode);
        dispatch.log.mode_after = next;
        dispatch.log.hotspot = Some(hotspot);
        dispatch.cursor = Some(CursorCommand::Set(hotspot.cursor()));
        dispatch.prevent_default = !event.is_touch();
        if let Some([start, _, _]) = next.notifications() {
            dispatch.notifications.push(self.notification(host, start));
        }
        finish(dispatch)
    }

    /// Pointer-up anywhere in the document: ends the open gesture.
    pub fn pointer_up(&mut self) -> Dispatch<N> {
        let mode = self.state.mode;
        let Some([_, _, end]) = mode.notifications() else {
            return finish(Dispatch::ignored(
                LifecyclePhase::PointerUp,
                IgnoredReason::NoActiveGesture,
                mode,
            ));
        };

        self.state.end_gesture();
        let mut dispatch = Dispatch::applied(LifecyclePhase::PointerUp, mode);
        dispatch.log.mode_after = self.state.mode;
        dispatch.cursor = Some(CursorCommand::Clear);
        if let Some(host) = self.host {
            dispatch.notifications.push(self.notification(host, end));
        }
        finish(dispatch)
    }

    /// Enter or leave maximize on behalf of the host and notify listeners.
    pub fn trigger_maximize<D>(&mut self, doc: &D, maximize: bool) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        let Some(host) = self.host else {
            return finish(Dispatch::ignored(
                LifecyclePhase::Maximize,
                IgnoredReason::NotMounted,
                mode,
            ));
        };

        self.config.maximize = maximize;
        if let Err(reason) = self.apply_maximize(doc, maximize) {
            return finish(Dispatch::ignored(LifecyclePhase::Maximize, reason, mode));
        }
        let mut dispatch = Dispatch::applied(LifecyclePhase::Maximize, mode);
        dispatch.notifications.push(Notification::maximize(
            maximize,
            self.state.snapshot(),
            host,
        ));
        finish(dispatch)
    }

    /// Replace the configuration, reacting to what changed.
    ///
    /// - bounds are copied (the current box is not re-clamped);
    /// - numeric width/height/left/top overwrite the box, raw ones are ignored;
    /// - a new drag selector is re-evaluated;
    /// - new disabled attributes rebuild the axis mask;
    /// - a maximize toggle is applied and notified.
    pub fn update_config<D>(&mut self, doc: &D, config: ResizableConfig) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        let previous = std::mem::replace(&mut self.config, config);
        for advisory in self.config.validate() {
            warn!(advisory = %advisory, "resizer config advisory");
        }

        self.state.bounds = self.config.bounds();
        if let Some(width) = changed_px(previous.width.as_ref(), self.config.width.as_ref()) {
            self.state.width = Some(Length::Px(width));
        }
        if let Some(height) = changed_px(previous.height.as_ref(), self.config.height.as_ref()) {
            self.state.height = Some(Length::Px(height));
        }
        if let Some(left) = changed_px(Some(&previous.left), Some(&self.config.left)) {
            self.state.left = Length::Px(left);
        }
        if let Some(top) = changed_px(Some(&previous.top), Some(&self.config.top)) {
            self.state.top = Length::Px(top);
        }
        if previous.drag_selector != self.config.drag_selector {
            self.refresh_drag_regions(doc);
        }
        if previous.disable_attributes != self.config.disable_attributes {
            self.state.axis_mask = self.config.axis_mask();
        }

        let mut dispatch = Dispatch::applied(LifecyclePhase::ConfigUpdate, mode);
        if previous.maximize != self.config.maximize {
            let maximize = self.config.maximize;
            if let Err(reason) = self.apply_maximize(doc, maximize) {
                debug!(?reason, maximize, "maximize toggle skipped");
            }
            if let Some(host) = self.host {
                dispatch.notifications.push(Notification::maximize(
                    maximize,
                    self.state.snapshot(),
                    host,
                ));
            }
        }
        finish(dispatch)
    }

    pub(crate) fn notification(&self, host: N, kind: NotificationKind) -> Notification<N> {
        Notification::new(kind, self.state.snapshot(), host)
    }
}

/// New pixel value when `next` differs from `previous` and is numeric.
fn changed_px(previous: Option<&Length>, next: Option<&Length>) -> Option<f64> {
    if previous == next {
        return None;
    }
    next.and_then(Length::as_px)
}

/// Log a dispatch and hand it back.
pub(crate) fn finish<N>(dispatch: Dispatch<N>) -> Dispatch<N> {
    debug!(
        phase = ?dispatch.log.phase,
        outcome = ?dispatch.log.outcome,
        mode = ?dispatch.log.mode_after,
        notifications = dispatch.notifications.len(),
        "resizer dispatch"
    );
    dispatch
}
