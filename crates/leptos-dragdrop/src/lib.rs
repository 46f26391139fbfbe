//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for Leptos lists using mouse events.
//! A drag starts from a handle and only after the pointer moves past a
//! threshold, so plain clicks on the handle never reorder anything.
//! Dropping onto another row reports `(dragged, target)` keys.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals, keyed by row id
pub struct DndSignals<K: Send + Sync + 'static> {
    /// Row currently being dragged
    pub dragging_id: RwSignal<Option<K>>,
    /// Row the pointer is over while dragging
    pub drop_target: RwSignal<Option<K>>,
    /// Handle pressed but threshold not yet passed
    pub pending_id: RwSignal<Option<K>>,
    /// Pointer position at mousedown
    pub start: RwSignal<(i32, i32)>,
}

impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

pub fn create_dnd_signals<K: Send + Sync + 'static>() -> DndSignals<K> {
    DndSignals {
        dragging_id: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        pending_id: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

impl<K> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    /// Is `id` the row being dragged
    pub fn is_dragging(&self, id: &K) -> bool {
        self.dragging_id.with(|d| d.as_ref() == Some(id))
    }

    /// Is `id` the row that would receive the drop
    pub fn is_drop_target(&self, id: &K) -> bool {
        self.drop_target.with(|t| t.as_ref() == Some(id))
    }

    /// End drag operation
    pub fn end_drag(&self) {
        self.dragging_id.set(None);
        self.drop_target.set(None);
        self.pending_id.set(None);
    }
}

/// Mousedown handler for a drag handle: records a pending drag
pub fn make_on_handle_mousedown<K>(dnd: DndSignals<K>, id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Keep the browser from starting a text selection
            ev.prevent_default();
            dnd.pending_id.set(Some(id.clone()));
            dnd.start.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Mouseenter handler for rows: becomes the drop target
pub fn make_on_row_mouseenter<K>(dnd: DndSignals<K>, id: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id.get_untracked();
        // Don't allow dropping on self
        if matches!(dragging, Some(ref d) if *d != id) {
            dnd.drop_target.set(Some(id.clone()));
        }
    }
}

/// Mouseleave handler for rows
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.with_untracked(Option::is_some) {
            dnd.drop_target.set(None);
        }
    }
}

/// Document mousemove: promotes a pending drag once past the threshold
fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id.get_untracked();
        if pending.is_some() && dnd.dragging_id.with_untracked(Option::is_none) {
            let start = dnd.start.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document mouseup (drop detection) and mousemove (drag start).
///
/// `on_drop(dragged, target)` runs only for a real drag released over
/// another row.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(K, K) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id.get_untracked();
        let target = dnd.drop_target.get_untracked();
        let was_active = dragging.is_some() || dnd.pending_id.with_untracked(Option::is_some);

        if was_active {
            dnd.end_drag();
        }
        if let (Some(dragged), Some(target)) = (dragging, target) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (10, 10)));
        assert!(!exceeds_threshold((10, 10), (15, 5)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_end_drag_clears_state() {
        let owner = Owner::new();
        owner.set();

        let dnd = create_dnd_signals::<String>();
        dnd.pending_id.set(Some("a".to_string()));
        dnd.dragging_id.set(Some("a".to_string()));
        dnd.drop_target.set(Some("b".to_string()));
        assert!(dnd.is_dragging(&"a".to_string()));
        assert!(dnd.is_drop_target(&"b".to_string()));

        dnd.end_drag();

        assert_eq!(dnd.pending_id.get_untracked(), None);
        assert_eq!(dnd.dragging_id.get_untracked(), None);
        assert_eq!(dnd.drop_target.get_untracked(), None);
    }
}
