use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in device pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1). Paint-order iteration sorts an index buffer that is
/// reused across frames, so a warmed-up list does not allocate.
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to
/// scope commands to a scissor rect. Nested clips intersect with their parent.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region. Calls must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap collapses to a zero-area clip; the renderer skips those items.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn paint_order_respects_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex(1), Vec2::splat(1.0), 1.0, Color::white());
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::black());
        list.push_solid_circle(ZIndex(1), Vec2::splat(2.0), 1.0, Color::white());

        let kinds: Vec<_> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Circle(c) if c.center.x == 1.0 => "circle1",
                DrawCmd::Circle(_) => "circle2",
                DrawCmd::RoundedRect(_) => "rrect",
            })
            .collect();
        assert_eq!(kinds, ["rect", "circle1", "circle2"]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        list.pop_clip();
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        list.pop_clip();
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(
            clips,
            [
                Some(Rect::new(50.0, 50.0, 50.0, 50.0)),
                Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
                None,
            ]
        );
    }

    #[test]
    fn clear_resets_items() {
        let mut list = DrawList::new();
        list.push_solid_rounded_rect(ZIndex(0), Rect::new(0.0, 0.0, 4.0, 4.0), 1.0, Color::white());
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);
    }
}
