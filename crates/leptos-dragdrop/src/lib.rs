//! Leptos DragDrop Utilities
//!
//! Mouse-event drag and drop of items (identified by `u32`) onto keyed drop
//! targets such as kanban columns. A press only becomes a drag once the
//! pointer has moved past a small threshold, so plain clicks still work.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop, so the click that
/// follows mouseup can be ignored
const CLICK_SUPPRESS_MS: u64 = 100;

/// DnD state signals. `K` keys the drop targets.
pub struct DndSignals<K: 'static> {
    pub dragging_id: RwSignal<Option<u32>>,
    pub drop_target: RwSignal<Option<K>>,
    pub drag_just_ended: RwSignal<bool>,
    /// Pressed but not yet moved far enough to count as a drag
    pub pending_id: RwSignal<Option<u32>>,
    /// Press position for threshold detection
    pub start: RwSignal<(i32, i32)>,
}

impl<K: 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for DndSignals<K> {}

impl<K> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    /// Is this item the one being dragged
    pub fn is_dragging(&self, id: u32) -> bool {
        self.dragging_id.get() == Some(id)
    }

    /// Is any drag in progress
    pub fn is_active(&self) -> bool {
        self.dragging_id.get().is_some()
    }

    /// Is the pointer currently over this target during a drag
    pub fn is_over(&self, target: K) -> bool {
        self.drop_target.get() == Some(target)
    }
}

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        dragging_id: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending_id: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

/// True once the pointer is more than the threshold away from the press
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    dnd.dragging_id.set(None);
    dnd.drop_target.set(None);
    dnd.pending_id.set(None);
    dnd.drag_just_ended.set(true);

    let flag = dnd.drag_just_ended;
    set_timeout(move || flag.set(false), Duration::from_millis(CLICK_SUPPRESS_MS));
}

fn is_form_control(ev: &web_sys::MouseEvent) -> bool {
    ev.target().is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
    })
}

/// Mousedown handler for a draggable item. Records a pending drag.
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_form_control(&ev) {
            return;
        }
        dnd.pending_id.set(Some(item_id));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter handler for a drop target
pub fn make_on_target_mouseenter<K>(dnd: DndSignals<K>, target: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(Some(target));
        }
    }
}

/// Mouseleave handler for a drop target
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>, target: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        // entering the next target may already have replaced it
        if dnd.drop_target.get_untracked() == Some(target) {
            dnd.drop_target.set(None);
        }
    }
}

/// Bind window-level mousemove/mouseup handlers for the lifetime of the
/// calling component. `on_drop(item_id, target)` runs on a completed drag.
pub fn bind_global_handlers<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static,
    F: Fn(u32, K) + Clone + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id.get_untracked();
        if pending.is_none() || dnd.dragging_id.get_untracked().is_some() {
            return;
        }
        if exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y())) {
            log::debug!("drag start: item {:?}", pending);
            dnd.dragging_id.set(pending);
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragged = dnd.dragging_id.get_untracked();
        let target = dnd.drop_target.get_untracked();
        dnd.pending_id.set(None);

        match (dragged, target) {
            (Some(item_id), Some(target)) => {
                log::debug!("drop: item {} on {:?}", item_id, target);
                end_drag(&dnd);
                on_drop(item_id, target);
            }
            (Some(item_id), None) => {
                log::debug!("drag of item {} released outside any target", item_id);
                end_drag(&dnd);
            }
            // plain click, let it through
            (None, _) => dnd.drop_target.set(None),
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}
