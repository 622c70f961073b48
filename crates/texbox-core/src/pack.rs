//! Natural-size packing of horizontal and vertical lists.
//!
//! Kerns and glue are dispatched on here rather than through their own
//! accessors: a kern's single amount counts along the axis of the list that
//! contains it, and glue never contributes to natural size.

use tracing::trace;

use crate::logging::targets;
use crate::node::{Dimensions, Node};

/// Pack children left to right.
///
/// The width is the sum of the children's widths (a kern's amount, zero for
/// glue). The height and depth are the maxima of the children's heights and
/// depths, with kerns and glue contributing zero.
///
/// Both maxima start at zero, so negative extents are clamped: a lone box
/// with depth -1 packs to depth 0, and a list never reports a negative
/// height or depth.
pub fn hpack(children: &[Node]) -> Dimensions {
    let mut dims = Dimensions::ZERO;

    for child in children {
        match child {
            Node::Kern(amount) => dims.width += *amount,
            Node::Glue(_) => {}
            _ => {
                let child = child.dimensions();
                dims.width += child.width;
                dims.height = dims.height.max(child.height);
                dims.depth = dims.depth.max(child.depth);
            }
        }
    }

    trace!(target: targets::PACK, children = children.len(), ?dims, "hpack");
    dims
}

/// Pack children top to bottom.
///
/// The width is the maximum of the children's widths. Every child but the
/// last contributes its full vertical extent (height + depth, a kern's
/// amount, zero for glue) to the height; the last contributes only its
/// height and supplies the list's depth. A trailing kern still adds its
/// amount to the height, and a trailing kern or glue leaves the depth at
/// zero.
pub fn vpack(children: &[Node]) -> Dimensions {
    let mut dims = Dimensions::ZERO;
    let Some((last, rest)) = children.split_last() else {
        return dims;
    };

    for child in rest {
        match child {
            Node::Kern(amount) => dims.height += *amount,
            Node::Glue(_) => {}
            _ => {
                let child = child.dimensions();
                dims.width = dims.width.max(child.width);
                dims.height += child.vertical_extent();
            }
        }
    }

    match last {
        Node::Kern(amount) => dims.height += *amount,
        Node::Glue(_) => {}
        _ => {
            let child = last.dimensions();
            dims.width = dims.width.max(child.width);
            dims.height += child.height;
            dims.depth = child.depth;
        }
    }

    trace!(target: targets::PACK, children = children.len(), ?dims, "vpack");
    dims
}
