//! Leptos DragDrop Utilities
//!
//! Live list reordering for Leptos using native HTML5 drag events.
//! On every `dragover` the dragged entry is moved before the nearest
//! sibling whose vertical midpoint lies below the pointer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute carrying the entry id on every draggable child of the container
pub const DND_ID_ATTR: &str = "data-dnd-id";

/// Single drag session. At most one entry is dragged at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<u32>,
}

impl DragSession {
    /// Start dragging `id`. Returns false (and changes nothing) while
    /// another drag is still active.
    pub fn begin(&mut self, id: u32) -> bool {
        if self.dragged.is_some() {
            return false;
        }
        self.dragged = Some(id);
        true
    }

    /// End the session, returning the entry that was being dragged
    pub fn end(&mut self) -> Option<u32> {
        self.dragged.take()
    }

    pub fn dragged(&self) -> Option<u32> {
        self.dragged
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }
}

/// Vertical extent of one rendered entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemSpan {
    pub id: u32,
    pub top: f64,
    pub height: f64,
}

impl ItemSpan {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where the dragged entry should go
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderPlan {
    /// Insert immediately before the given entry
    InsertBefore(u32),
    /// Move to the end of the list
    AppendToEnd,
}

/// Find the entry the dragged one should be inserted before.
///
/// Scans every span except `dragged`, keeping the one with the largest
/// strictly negative `pointer_y - midpoint`. Ties keep the earlier span.
pub fn find_insert_before(spans: &[ItemSpan], dragged: u32, pointer_y: f64) -> Option<u32> {
    let mut best_offset = f64::NEG_INFINITY;
    let mut best = None;

    for span in spans.iter().filter(|s| s.id != dragged) {
        let offset = pointer_y - span.midpoint();
        if offset < 0.0 && offset > best_offset {
            best_offset = offset;
            best = Some(span.id);
        }
    }

    best
}

/// Compute the reorder plan for a pointer position
pub fn plan_reorder(spans: &[ItemSpan], dragged: u32, pointer_y: f64) -> ReorderPlan {
    match find_insert_before(spans, dragged, pointer_y) {
        Some(target) => ReorderPlan::InsertBefore(target),
        None => ReorderPlan::AppendToEnd,
    }
}

/// Read the spans of all id-tagged children of `container`, in DOM order
pub fn collect_spans(container: &web_sys::Element) -> Vec<ItemSpan> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| {
            let id = el.get_attribute(DND_ID_ATTR)?.parse::<u32>().ok()?;
            let rect = el.get_bounding_client_rect();
            Some(ItemSpan {
                id,
                top: rect.top(),
                height: rect.height(),
            })
        })
        .collect()
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub session: RwSignal<DragSession>,
}

impl DndSignals {
    /// Currently dragged entry (tracked)
    pub fn dragging(&self) -> Option<u32> {
        self.session.get().dragged()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        session: RwSignal::new(DragSession::default()),
    }
}

/// Start a session for `id`, returning false if one is already running
pub fn begin_drag(dnd: &DndSignals, id: u32) -> bool {
    let mut session = dnd.session.get_untracked();
    if !session.begin(id) {
        return false;
    }
    dnd.session.set(session);
    true
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) -> Option<u32> {
    let mut session = dnd.session.get_untracked();
    let ended = session.end();
    if ended.is_some() {
        dnd.session.set(session);
    }
    ended
}

/// Create dragstart handler for a draggable entry.
/// A second drag started while one is active is cancelled.
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if !begin_drag(&dnd, item_id) {
            tracing::debug!(item_id, "[DND] drag start ignored, session already active");
            ev.prevent_default();
            return;
        }
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox refuses to start a drag without a payload
            let _ = dt.set_data("text/plain", "");
        }
        tracing::debug!(item_id, "[DND] drag start");
    }
}

/// Create dragover handler for the list container.
///
/// Must be bound on the container itself: spans are read from the
/// event's current target.
pub fn make_on_dragover<F>(dnd: DndSignals, on_reorder: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, ReorderPlan) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(dragged) = dnd.session.get_untracked().dragged() else {
            return;
        };
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let spans = collect_spans(&container);
        let plan = plan_reorder(&spans, dragged, f64::from(ev.client_y()));
        on_reorder(dragged, plan);
    }
}

/// Create drop handler. Keeps the browser from navigating to the payload.
pub fn make_on_drop() -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    }
}

/// Create dragend handler (fires after drop and after cancel)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if let Some(item_id) = end_drag(&dnd) {
            tracing::debug!(item_id, "[DND] drag end");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(heights: &[(u32, f64)]) -> Vec<ItemSpan> {
        let mut top = 0.0;
        heights
            .iter()
            .map(|&(id, height)| {
                let span = ItemSpan { id, top, height };
                top += height;
                span
            })
            .collect()
    }

    #[test]
    fn test_session_ignores_reentrant_start() {
        let mut session = DragSession::default();
        assert!(session.begin(1));
        assert!(!session.begin(2));
        assert_eq!(session.dragged(), Some(1));
        assert_eq!(session.end(), Some(1));
        assert!(!session.is_active());
        assert_eq!(session.end(), None);
        assert!(session.begin(2));
    }

    #[test]
    fn test_nearest_midpoint_below_pointer() {
        // midpoints: 1 -> 5, 2 -> 15, 3 -> 25
        let list = spans(&[(1, 10.0), (2, 10.0), (3, 10.0)]);

        assert_eq!(find_insert_before(&list, 1, 22.0), Some(3));
        assert_eq!(find_insert_before(&list, 3, 12.0), Some(2));
        assert_eq!(find_insert_before(&list, 3, 0.0), Some(1));
    }

    #[test]
    fn test_dragged_entry_is_skipped() {
        let list = spans(&[(1, 10.0), (2, 10.0), (3, 10.0)]);
        // Pointer above entry 1's midpoint, but 1 is the one being dragged
        assert_eq!(find_insert_before(&list, 1, 2.0), Some(2));
    }

    #[test]
    fn test_pointer_on_midpoint_is_not_above_it() {
        let list = spans(&[(1, 10.0), (2, 10.0)]);
        assert_eq!(find_insert_before(&list, 9, 5.0), Some(2));
        assert_eq!(find_insert_before(&list, 9, 15.0), None);
    }

    #[test]
    fn test_below_all_entries_appends() {
        let list = spans(&[(1, 10.0), (2, 10.0)]);
        assert_eq!(plan_reorder(&list, 1, 40.0), ReorderPlan::AppendToEnd);
        assert_eq!(plan_reorder(&[], 1, 40.0), ReorderPlan::AppendToEnd);
    }

    #[test]
    fn test_sole_entry_has_no_target() {
        let list = spans(&[(7, 20.0)]);
        assert_eq!(plan_reorder(&list, 7, 0.0), ReorderPlan::AppendToEnd);
    }

    #[test]
    fn test_equal_midpoints_keep_first() {
        let list = vec![
            ItemSpan { id: 1, top: 10.0, height: 10.0 },
            ItemSpan { id: 2, top: 10.0, height: 10.0 },
        ];
        assert_eq!(find_insert_before(&list, 3, 0.0), Some(1));
    }
}
