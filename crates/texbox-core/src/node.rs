//! Box model nodes.

use crate::glue::GlueKind;
use crate::pack::{hpack, vpack};

/// The extent of a node around its reference point.
///
/// ```text
///                     ---  ↑
///                    / ,_\ │
///                  ,_| |_  │ height
///                  |_, ,_| │
///                    | |   ↓
/// reference point ×─ | | ─── baseline
///                    | |   ↑
///                   /_/    ↓ depth
///                  ←─────→
///                   width
/// ```
///
/// All values are in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// Horizontal extent.
    pub width: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
}

impl Dimensions {
    /// Zero width, height and depth.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create new dimensions.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Total vertical extent (height + depth).
    #[inline]
    pub fn vertical_extent(&self) -> f64 {
        self.height + self.depth
    }
}

/// Packing discipline of a horizontal list.
///
/// Mirrors TeX's `hpack` modes. The two modes only diverge once a target
/// width is resolved against glue stretch and shrink; for natural-size
/// queries they agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackMode {
    /// Natural width plus any additional amount.
    #[default]
    Additional,
    /// Exactly the requested width.
    Exactly,
}

impl From<bool> for PackMode {
    fn from(exact: bool) -> Self {
        if exact {
            PackMode::Exactly
        } else {
            PackMode::Additional
        }
    }
}

/// A horizontal list: children laid out left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HList {
    /// The children, in order.
    pub children: Vec<Node>,
    /// The packing discipline.
    pub mode: PackMode,
}

/// A node of the box tree.
///
/// Nodes are immutable after construction and a list exclusively owns its
/// children. Dimension queries are pure functions of the subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A fixed, non-stretchable box.
    Box(Dimensions),
    /// A fixed amount of space. Its axis is decided by the containing list.
    Kern(f64),
    /// Rubber space with zero natural size.
    Glue(GlueKind),
    /// A horizontal list.
    HList(HList),
    /// A vertical list, laid out top to bottom.
    VList(Vec<Node>),
}

impl Node {
    /// A box with the given width and no height or depth.
    pub fn hbox(width: f64) -> Self {
        Node::Box(Dimensions::new(width, 0.0, 0.0))
    }

    /// A box with the given height and depth and no width.
    pub fn vbox(height: f64, depth: f64) -> Self {
        Node::Box(Dimensions::new(0.0, height, depth))
    }

    /// A box with all three dimensions given.
    pub fn fixed(dims: Dimensions) -> Self {
        Node::Box(dims)
    }

    /// A kern of the given (possibly negative) amount.
    pub fn kern(amount: f64) -> Self {
        Node::Kern(amount)
    }

    /// A glue node of the given kind.
    pub fn glue(kind: GlueKind) -> Self {
        Node::Glue(kind)
    }

    /// A horizontal list; `exact` selects [`PackMode::Exactly`].
    pub fn hlist(children: Vec<Node>, exact: bool) -> Self {
        Node::HList(HList {
            children,
            mode: PackMode::from(exact),
        })
    }

    /// A vertical list.
    pub fn vlist(children: Vec<Node>) -> Self {
        Node::VList(children)
    }

    /// Center `children` horizontally between two `ss` glues.
    ///
    /// Glue has no natural size, so the result measures exactly like
    /// `Node::hlist(children, false)`.
    pub fn hcentered(children: Vec<Node>) -> Self {
        let mut list = Vec::with_capacity(children.len() + 2);
        list.push(Node::Glue(GlueKind::Ss));
        list.extend(children);
        list.push(Node::Glue(GlueKind::Ss));
        Node::HList(HList {
            children: list,
            mode: PackMode::Additional,
        })
    }

    /// Center `children` vertically between two `ss` glues.
    ///
    /// The trailing glue becomes the last element of the vertical list, so
    /// every child contributes its full height + depth to the height and
    /// the resulting depth is zero.
    pub fn vcentered(children: Vec<Node>) -> Self {
        let mut list = Vec::with_capacity(children.len() + 2);
        list.push(Node::Glue(GlueKind::Ss));
        list.extend(children);
        list.push(Node::Glue(GlueKind::Ss));
        Node::VList(list)
    }

    /// Width, height and depth of this node.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Node::Box(dims) => *dims,
            Node::Kern(amount) => Dimensions::new(*amount, 0.0, 0.0),
            Node::Glue(_) => Dimensions::ZERO,
            Node::HList(list) => hpack(&list.children),
            Node::VList(children) => vpack(children),
        }
    }

    /// The width of this node.
    pub fn width(&self) -> f64 {
        self.dimensions().width
    }

    /// The height of this node.
    pub fn height(&self) -> f64 {
        self.dimensions().height
    }

    /// The depth of this node.
    pub fn depth(&self) -> f64 {
        self.dimensions().depth
    }

    /// The children of a list node, or an empty slice for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::HList(list) => &list.children,
            Node::VList(children) => children,
            Node::Box(_) | Node::Kern(_) | Node::Glue(_) => &[],
        }
    }

    /// Whether this node is a kern.
    pub fn is_kern(&self) -> bool {
        matches!(self, Node::Kern(_))
    }

    /// Whether this node is glue.
    pub fn is_glue(&self) -> bool {
        matches!(self, Node::Glue(_))
    }
}
