// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary-tree rectangle packing.

use alloc::vec::Vec;
use tessel_math::Rect;

use crate::error::PackError;

/// Index of a node in the packer's arena.
type NodeIdx = usize;

#[derive(Copy, Clone, Debug)]
struct Node {
    rect: Rect<i32>,
    children: Option<[NodeIdx; 2]>,
    /// For a leaf: its rectangle was handed out. For an internal node: both
    /// subtrees are completely used.
    in_use: bool,
}

impl Node {
    fn leaf(rect: Rect<i32>) -> Self {
        Self {
            rect,
            children: None,
            in_use: false,
        }
    }
}

/// Packs rectangles into a fixed area, first fit, never moving a placed one.
///
/// The free area is a binary tree of regions. A request descends to the
/// first free leaf that is large enough, which is split along its larger
/// slack: one part is sized exactly to the request on the split axis, the
/// other keeps the rest. Every handed-out rectangle keeps a gap of
/// `2 * padding` to its neighbors and `padding` to the outer border.
///
/// Rectangles use a bottom-up y axis; `(left, bottom)` is the origin of the
/// placed rectangle.
#[derive(Clone, Debug)]
pub struct BoxPacker {
    nodes: Vec<Node>,
    root: Option<NodeIdx>,
    padding: i32,
}

impl BoxPacker {
    /// Create a packer for a `width` × `height` area.
    ///
    /// If the padding leaves no room on either axis the packer starts out
    /// without any free space; see [`BoxPacker::enlarge`].
    pub fn new(width: i32, height: i32, padding: i32) -> Self {
        let mut packer = Self {
            nodes: Vec::new(),
            root: None,
            padding,
        };
        packer.root = packer.outer_leaf(width, height);
        packer
    }

    /// The leaf spanning the padded interior of a `width` × `height` area.
    fn outer_leaf(&mut self, width: i32, height: i32) -> Option<NodeIdx> {
        let p = self.padding;
        if width <= 2 * p || height <= 2 * p {
            return None;
        }
        Some(self.add(Node::leaf(Rect::new(p, p, width - p, height - p))))
    }

    fn add(&mut self, node: Node) -> NodeIdx {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Padding kept around each rectangle.
    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Outer width including the border padding; 0 without free space.
    pub fn width(&self) -> i32 {
        self.root
            .map_or(0, |root| self.nodes[root].rect.width() + 2 * self.padding)
    }

    /// Outer height including the border padding; 0 without free space.
    pub fn height(&self) -> i32 {
        self.root
            .map_or(0, |root| self.nodes[root].rect.height() + 2 * self.padding)
    }

    /// Place a `width` × `height` rectangle.
    pub fn pack(&mut self, width: i32, height: i32) -> Result<Rect<i32>, PackError> {
        self.try_pack(width, height).ok_or_else(|| {
            log::debug!("box packer overflow for {width}x{height}");
            PackError::Overflow { width, height }
        })
    }

    /// Place a `width` × `height` rectangle, or return `None` when it does not
    /// fit anywhere.
    pub fn try_pack(&mut self, width: i32, height: i32) -> Option<Rect<i32>> {
        if width < 0 || height < 0 {
            return None;
        }
        let root = self.root?;
        let found = self.insert(root, width, height)?;
        Some(self.nodes[found].rect)
    }

    fn insert(&mut self, idx: NodeIdx, width: i32, height: i32) -> Option<NodeIdx> {
        let node = self.nodes[idx];
        if node.in_use {
            return None;
        }

        if let Some([first, second]) = node.children {
            let result = self
                .insert(first, width, height)
                .or_else(|| self.insert(second, width, height));
            self.nodes[idx].in_use = self.nodes[first].in_use && self.nodes[second].in_use;
            return result;
        }

        let rect = node.rect;
        let dw = rect.width() - width;
        let dh = rect.height() - height;
        if dw < 0 || dh < 0 {
            return None;
        }
        if dw == 0 && dh == 0 {
            self.nodes[idx].in_use = true;
            return Some(idx);
        }

        let gap = 2 * self.padding;
        let (fit, rest) = if dw > dh {
            (
                Rect::new(rect.left, rect.bottom, rect.left + width, rect.top),
                Rect::new(rect.left + width + gap, rect.bottom, rect.right, rect.top),
            )
        } else {
            (
                Rect::new(rect.left, rect.bottom, rect.right, rect.bottom + height),
                Rect::new(rect.left, rect.bottom + height + gap, rect.right, rect.top),
            )
        };
        let first = self.add(Node::leaf(fit));
        let second = self.add(Node::leaf(rest));
        self.nodes[idx].children = Some([first, second]);
        self.insert(first, width, height)
    }

    /// Grow the area to `width` × `height`, keeping every placed rectangle.
    ///
    /// The area can only grow: both sizes must be at least the current
    /// [`width`](Self::width) and [`height`](Self::height). The new free
    /// space is the L-shaped region to the right of and above the old area.
    pub fn enlarge(&mut self, width: i32, height: i32) -> Result<(), PackError> {
        let p = self.padding;
        let Some(old_root) = self.root else {
            self.root = self.outer_leaf(width, height);
            log::debug!("box packer starts at {width}x{height}");
            return Ok(());
        };

        let old = self.nodes[old_root].rect;
        if width < old.right + p || height < old.top + p {
            return Err(PackError::InvalidEnlarge {
                width,
                height,
                min_width: old.right + p,
                min_height: old.top + p,
            });
        }

        let gap = 2 * p;
        let right = self.add(Node::leaf(Rect::new(
            old.right + gap,
            old.bottom,
            width - p,
            old.top,
        )));
        let top = self.add(Node::leaf(Rect::new(
            old.left,
            old.top + gap,
            width - p,
            height - p,
        )));
        let extension = self.add(Node {
            rect: Rect::new(old.left, old.bottom, width - p, height - p),
            children: Some([right, top]),
            in_use: false,
        });
        let root = self.add(Node {
            rect: Rect::new(p, p, width - p, height - p),
            children: Some([old_root, extension]),
            in_use: false,
        });
        self.root = Some(root);
        log::debug!("box packer enlarged to {width}x{height}");
        Ok(())
    }

    /// Rectangles handed out so far, in no particular order.
    pub fn packed(&self) -> impl Iterator<Item = Rect<i32>> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.in_use && n.children.is_none())
            .map(|n| n.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_disjoint(packer: &BoxPacker) {
        let rects: Vec<_> = packer.packed().collect();
        let p = packer.padding();
        for (i, a) in rects.iter().enumerate() {
            assert!(a.left >= p && a.bottom >= p, "{a:?} crosses the border");
            assert!(a.right <= packer.width() - p && a.top <= packer.height() - p, "{a:?} crosses the border");
            for b in &rects[i + 1..] {
                assert!(!a.expanded(p).intersects(&b.expanded(p)), "{a:?} and {b:?} are too close");
            }
        }
    }

    #[test]
    fn first_fit_splits_along_the_larger_slack() {
        let mut packer = BoxPacker::new(128, 64, 0);
        assert_eq!((packer.width(), packer.height()), (128, 64));

        // Width slack 96 beats height slack 32: a full-height column is split off.
        assert_eq!(packer.pack(32, 32), Ok(Rect::new(0, 0, 32, 32)));
        // The column's remainder sits on top of the first rectangle.
        assert_eq!(packer.pack(32, 32), Ok(Rect::new(0, 32, 32, 64)));
        assert_eq!(packer.pack(96, 64), Ok(Rect::new(32, 0, 128, 64)));
        assert_eq!(packer.pack(1, 1), Err(PackError::Overflow { width: 1, height: 1 }));
        assert_eq!(packer.packed().count(), 3);
    }

    #[test]
    fn ties_split_the_height() {
        let mut packer = BoxPacker::new(10, 10, 0);
        assert_eq!(packer.pack(5, 5), Ok(Rect::new(0, 0, 5, 5)));
        // The bottom row keeps the free space to the right of the first rectangle.
        assert_eq!(packer.pack(5, 5), Ok(Rect::new(5, 0, 10, 5)));
        assert_eq!(packer.pack(10, 5), Ok(Rect::new(0, 5, 10, 10)));
        assert!(packer.try_pack(1, 1).is_none());
    }

    #[test]
    fn padding_keeps_rectangles_apart() {
        let mut packer = BoxPacker::new(64, 64, 2);
        assert_eq!(packer.width(), 64);
        assert_eq!(packer.pack(10, 60), Ok(Rect::new(2, 2, 12, 62)));
        assert_eq!(packer.pack(10, 60), Ok(Rect::new(16, 2, 26, 62)));
        assert_disjoint(&packer);
    }

    #[test]
    fn padding_can_eat_the_whole_area() {
        let mut packer = BoxPacker::new(4, 100, 2);
        assert_eq!((packer.width(), packer.height()), (0, 0));
        assert_eq!(packer.pack(0, 0), Err(PackError::Overflow { width: 0, height: 0 }));

        // A rootless packer accepts any new size.
        packer.enlarge(20, 20).unwrap();
        assert_eq!((packer.width(), packer.height()), (20, 20));
        assert_eq!(packer.pack(16, 16), Ok(Rect::new(2, 2, 18, 18)));
    }

    #[test]
    fn rejects_negative_and_oversized_requests() {
        let mut packer = BoxPacker::new(32, 32, 0);
        assert!(packer.try_pack(-1, 4).is_none());
        assert!(packer.try_pack(33, 1).is_none());
        assert_eq!(packer.packed().count(), 0);
        assert_eq!(packer.pack(32, 32), Ok(Rect::new(0, 0, 32, 32)));
    }

    #[test]
    fn enlarge_keeps_placed_rectangles() {
        let mut packer = BoxPacker::new(16, 16, 1);
        let first = packer.pack(14, 14).unwrap();
        assert!(packer.try_pack(4, 4).is_none());

        assert_eq!(
            packer.enlarge(8, 32),
            Err(PackError::InvalidEnlarge {
                width: 8,
                height: 32,
                min_width: 16,
                min_height: 16,
            })
        );
        assert_eq!(packer.width(), 16);

        packer.enlarge(32, 16).unwrap();
        assert_eq!((packer.width(), packer.height()), (32, 16));
        // The new strip to the right starts a padding gap after the old area.
        assert_eq!(packer.pack(14, 14), Ok(Rect::new(17, 1, 31, 15)));
        assert!(packer.packed().any(|r| r == first));
        assert!(packer.try_pack(1, 1).is_none());

        packer.enlarge(32, 32).unwrap();
        assert_eq!(packer.pack(30, 14), Ok(Rect::new(1, 17, 31, 31)));
        assert_disjoint(&packer);
    }

    #[test]
    fn random_requests_never_overlap() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut packer = BoxPacker::new(256, 256, 1);
        let mut placed = 0;
        for _ in 0..500 {
            let (w, h) = (rng.i32(1..40), rng.i32(1..40));
            match packer.pack(w, h) {
                Ok(r) => {
                    assert_eq!((r.width(), r.height()), (w, h));
                    placed += 1;
                }
                Err(PackError::Overflow { .. }) => {
                    packer.enlarge(packer.width() + 64, packer.height() + 64).unwrap();
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        }
        assert_eq!(packer.packed().count(), placed);
        assert_disjoint(&packer);
    }
}
