//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Rows are grouped into scopes (e.g. "top-level tasks" or "subtasks of task
//! X"). A drop zone is a slot between rows of one scope; dropping only counts
//! when the dragged row belongs to that scope.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Key bound for row ids and scopes
pub trait DndKey: Clone + PartialEq + Send + Sync + 'static {}

impl<T: Clone + PartialEq + Send + Sync + 'static> DndKey for T {}

/// A slot between rows: `(scope, index)`, where index 0 is before the first row
#[derive(Clone, Debug, PartialEq)]
pub struct DropSlot<S> {
    pub scope: S,
    pub index: usize,
}

/// Row being dragged, remembered with the scope it was picked up from
#[derive(Clone, Debug, PartialEq)]
pub struct DragSource<S, K> {
    pub scope: S,
    pub id: K,
}

/// DnD state signals
pub struct DndSignals<S: DndKey, K: DndKey> {
    pub dragging_read: ReadSignal<Option<DragSource<S, K>>>,
    pub dragging_write: WriteSignal<Option<DragSource<S, K>>>,
    pub drop_slot_read: ReadSignal<Option<DropSlot<S>>>,
    pub drop_slot_write: WriteSignal<Option<DropSlot<S>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource<S, K>>>,
    pub pending_write: WriteSignal<Option<DragSource<S, K>>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl<S: DndKey, K: DndKey> Clone for DndSignals<S, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: DndKey, K: DndKey> Copy for DndSignals<S, K> {}

impl<S: DndKey, K: DndKey> DndSignals<S, K> {
    /// Is `id` the row currently being dragged?
    pub fn is_dragging(&self, id: &K) -> bool {
        self.dragging_read
            .with(|d| d.as_ref().is_some_and(|d| &d.id == id))
    }

    pub fn is_any_dragging(&self) -> bool {
        self.dragging_read.with(Option::is_some)
    }

    /// Is this slot the live drop target?
    pub fn is_active_slot(&self, scope: &S, index: usize) -> bool {
        self.drop_slot_read
            .with(|s| s.as_ref().is_some_and(|s| &s.scope == scope && s.index == index))
    }

    /// Is a row of `scope` being dragged? Zones of other scopes stay hidden.
    pub fn is_dragging_in(&self, scope: &S) -> bool {
        self.dragging_read
            .with(|d| d.as_ref().is_some_and(|d| &d.scope == scope))
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<S: DndKey, K: DndKey>() -> DndSignals<S, K> {
    let (dragging_read, dragging_write) = signal(None::<DragSource<S, K>>);
    let (drop_slot_read, drop_slot_write) = signal(None::<DropSlot<S>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource<S, K>>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag<S: DndKey, K: DndKey>(dnd: &DndSignals<S, K>) {
    dnd.dragging_write.set(None);
    dnd.drop_slot_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable row.
/// Records pending drag with start position.
pub fn make_on_mousedown<S: DndKey, K: DndKey>(
    dnd: DndSignals<S, K>,
    scope: S,
    id: K,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Nested rows (subtasks inside a task) must not start the parent drag
        ev.stop_propagation();
        dnd.pending_write.set(Some(DragSource { scope: scope.clone(), id: id.clone() }));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove<S: DndKey, K: DndKey>(dnd: DndSignals<S, K>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        let (start_x, start_y) = dnd.start_read.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();

        // Start dragging if moved beyond threshold
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_write.set(Some(pending));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop zone
pub fn make_on_zone_mouseenter<S: DndKey, K: DndKey>(
    dnd: DndSignals<S, K>,
    scope: S,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.is_dragging_in(&scope) {
            dnd.drop_slot_write.set(Some(DropSlot { scope: scope.clone(), index }));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<S: DndKey, K: DndKey>(dnd: DndSignals<S, K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_slot_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` only fires when the slot belongs to the scope the row was
/// dragged from.
pub fn bind_global_mouseup<S, K, F>(dnd: DndSignals<S, K>, on_drop: F)
where
    S: DndKey,
    K: DndKey,
    F: Fn(DragSource<S, K>, DropSlot<S>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let slot = dnd.drop_slot_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);
        end_drag(&dnd);

        // Only a real drag (not a click) onto a slot of the same scope
        if let (Some(source), Some(slot)) = (dragging, slot) {
            if source.scope == slot.scope {
                on_drop(source, slot);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
