//! Drag-resize engine.
//!
//! Dragging a split line is a two-phase interaction. While the pointer is
//! down a [`DragSession`] only tracks a candidate position, snapped to the
//! grid and clamped to the legal range; the layout is untouched. On release
//! [`commit_drag`] re-validates the position and applies the new geometry to
//! the line, the blocks on either side of it, and the perpendicular lines that
//! end on it, as one replacement.

use drawerkit_core::{Axis, Block, BlockId, LayoutError, LineId, SplitLine};

use crate::layout::Layout;

/// Blocks on either side of a split line, split by which edge touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedBlocks {
    /// Blocks whose trailing edge lies on the line (above / left of it)
    pub before: Vec<BlockId>,
    /// Blocks whose leading edge lies on the line (below / right of it)
    pub after: Vec<BlockId>,
}

impl AffectedBlocks {
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }
}

/// Finds the blocks a drag of `line` resizes.
///
/// A block qualifies when one of its edges touches the line's position, it
/// overlaps the line's span by more than the minimum size, and it lies within
/// that span. Blocks elsewhere that merely share the coordinate are ignored.
///
/// An overlap of exactly the minimum size counts, so minimum-width
/// neighbours still move with the line.
pub fn find_affected_blocks(layout: &Layout, line: &SplitLine) -> AffectedBlocks {
    let grid = layout.grid();
    let eps = grid.epsilon;
    let axis = line.axis();
    let cross = axis.cross();
    let position = line.position();
    let (span_start, span_end) = line.span();

    let mut affected = AffectedBlocks::default();
    for block in layout.blocks() {
        let start = block.start(cross);
        let end = block.end(cross);
        let overlap = end.min(span_end) - start.max(span_start);
        if overlap <= grid.min_size - eps {
            continue;
        }
        if start < span_start - eps || end > span_end + eps {
            continue;
        }

        if (block.end(axis) - position).abs() <= eps {
            affected.before.push(block.id);
        } else if (block.start(axis) - position).abs() <= eps {
            affected.after.push(block.id);
        }
    }
    affected
}

/// Legal positions for a dragged line, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRange {
    pub min: f64,
    pub max: f64,
}

impl DragRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Computes how far `line` may move without shrinking any affected block
/// below the minimum size.
///
/// A side with no affected blocks falls back to the drawer edge. When the
/// bounds cross, the range collapses to the line's current position.
pub fn drag_range(layout: &Layout, line: &SplitLine, affected: &AffectedBlocks) -> DragRange {
    let grid = layout.grid();
    let axis = line.axis();

    let lower = affected
        .before
        .iter()
        .filter_map(|id| layout.block(*id))
        .map(|b| b.start(axis))
        .fold(0.0_f64, f64::max)
        + grid.min_size;
    let upper = affected
        .after
        .iter()
        .filter_map(|id| layout.block(*id))
        .map(|b| b.end(axis))
        .fold(layout.extent(axis), f64::min)
        - grid.min_size;

    if lower > upper {
        let position = line.position();
        DragRange {
            min: position,
            max: position,
        }
    } else {
        DragRange {
            min: lower,
            max: upper,
        }
    }
}

/// Snaps a pointer position to the grid and clamps it into `range`.
pub fn clamp_candidate(layout: &Layout, range: &DragRange, pointer: f64) -> f64 {
    range.clamp(layout.grid().snap(pointer))
}

/// Result of a committed drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub line: LineId,
    /// Signed move of the line, in internal units
    pub delta: f64,
    pub resized: Vec<BlockId>,
}

impl DragOutcome {
    /// False when the line was released where it started.
    pub fn changed(&self) -> bool {
        self.delta != 0.0
    }
}

/// Moves `line_id` to the grid-snapped `position` and resizes its neighbours.
///
/// The commit is all or nothing: if any affected block would fall below the
/// minimum size, or the result would not tile the drawer, the layout is left
/// exactly as it was and an error is returned.
pub fn commit_drag(
    layout: &mut Layout,
    line_id: LineId,
    position: f64,
) -> Result<DragOutcome, LayoutError> {
    let grid = *layout.grid();
    let line = *layout
        .split_line(line_id)
        .ok_or(LayoutError::LineNotFound { id: line_id })?;

    let axis = line.axis();
    let old = line.position();
    let target = grid.snap(position);
    let delta = target - old;
    if delta == 0.0 {
        return Ok(DragOutcome {
            line: line_id,
            delta,
            resized: Vec::new(),
        });
    }

    let affected = find_affected_blocks(layout, &line);
    if affected.before.is_empty() || affected.after.is_empty() {
        return Err(LayoutError::tiling(format!(
            "line {} does not separate two blocks",
            line_id
        )));
    }

    let mut blocks: Vec<Block> = layout.blocks().to_vec();
    for block in blocks.iter_mut() {
        if affected.before.contains(&block.id) {
            block.set_extent(axis, block.extent(axis) + delta);
        } else if affected.after.contains(&block.id) {
            block.set_start(axis, block.start(axis) + delta);
            block.set_extent(axis, block.extent(axis) - delta);
        } else {
            continue;
        }
        if block.extent(axis) < grid.min_size - grid.epsilon {
            return Err(LayoutError::BelowMinimumSize {
                id: block.id,
                size: block.extent(axis),
                min_size: grid.min_size,
            });
        }
    }

    let mut lines: Vec<SplitLine> = layout.split_lines().to_vec();
    for other in lines.iter_mut() {
        if other.id == line_id {
            other.set_position(target);
        } else if other.axis() != axis {
            move_endpoint(other, &line, target, grid.epsilon);
        }
    }

    layout.check_tiling(&blocks)?;

    let mut resized = affected.before;
    resized.extend(affected.after);
    layout.replace(blocks, lines);

    tracing::debug!(
        "Moved split line {} along {} from {} to {} ({} blocks resized)",
        line_id,
        axis,
        old,
        target,
        resized.len()
    );

    Ok(DragOutcome {
        line: line_id,
        delta,
        resized,
    })
}

/// Keeps a perpendicular line that ends on the interior of a moved line
/// attached to it.
fn move_endpoint(other: &mut SplitLine, moved: &SplitLine, target: f64, eps: f64) {
    let old = moved.position();
    let (span_start, span_end) = moved.span();
    let at = other.position();
    if at <= span_start + eps || at >= span_end - eps {
        return;
    }

    let (start, end) = other.span();
    if (start - old).abs() <= eps {
        other.set_span(target, end);
    } else if (end - old).abs() <= eps {
        other.set_span(start, target);
    }
}

/// Live state of an in-progress drag.
///
/// Holds the candidate position shown to renderers. Dropping the session
/// without committing leaves the layout as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    line: SplitLine,
    affected: AffectedBlocks,
    range: DragRange,
    candidate: f64,
}

impl DragSession {
    /// Starts dragging `line_id`, capturing its neighbours and legal range.
    pub fn begin(layout: &Layout, line_id: LineId) -> Result<Self, LayoutError> {
        let line = *layout
            .split_line(line_id)
            .ok_or(LayoutError::LineNotFound { id: line_id })?;
        let affected = find_affected_blocks(layout, &line);
        let range = drag_range(layout, &line, &affected);
        Ok(Self {
            line,
            affected,
            range,
            candidate: line.position(),
        })
    }

    /// Moves the candidate toward `pointer` and returns the clamped position.
    pub fn update(&mut self, layout: &Layout, pointer: f64) -> f64 {
        self.candidate = clamp_candidate(layout, &self.range, pointer);
        self.candidate
    }

    pub fn line_id(&self) -> LineId {
        self.line.id
    }

    pub fn axis(&self) -> Axis {
        self.line.axis()
    }

    pub fn origin(&self) -> f64 {
        self.line.position()
    }

    pub fn candidate(&self) -> f64 {
        self.candidate
    }

    pub fn range(&self) -> DragRange {
        self.range
    }

    pub fn affected(&self) -> &AffectedBlocks {
        &self.affected
    }

    /// The dragged line drawn at the candidate position
    pub fn preview_line(&self) -> SplitLine {
        let mut line = self.line;
        line.set_position(self.candidate);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::{split_block, SplitDirection};
    use drawerkit_core::units::GridSpec;
    use drawerkit_core::Dimensions;

    fn row_split() -> (Layout, LineId) {
        let mut layout =
            Layout::new(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default()).unwrap();
        let id = layout.blocks()[0].id;
        let outcome = split_block(&mut layout, id, SplitDirection::Row, true).unwrap();
        (layout, outcome.line)
    }

    #[test]
    fn test_affected_blocks_partition() {
        let (layout, line_id) = row_split();
        let line = layout.split_line(line_id).unwrap();
        let affected = find_affected_blocks(&layout, line);
        assert_eq!(affected.before.len(), 1);
        assert_eq!(affected.after.len(), 1);
        let top = layout.block(affected.before[0]).unwrap();
        assert_eq!(top.y, 0.0);
    }

    #[test]
    fn test_range_respects_min_size() {
        let (layout, line_id) = row_split();
        let line = layout.split_line(line_id).unwrap();
        let affected = find_affected_blocks(&layout, line);
        let range = drag_range(&layout, line, &affected);
        assert_eq!(range, DragRange { min: 20.0, max: 180.0 });
    }

    #[test]
    fn test_session_snaps_and_clamps() {
        let (layout, line_id) = row_split();
        let mut session = DragSession::begin(&layout, line_id).unwrap();
        assert_eq!(session.update(&layout, 52.4), 50.0);
        assert_eq!(session.update(&layout, 3.0), 20.0);
        assert_eq!(session.update(&layout, 500.0), 180.0);
        assert_eq!(session.preview_line().y1, 180.0);
        // Layout is untouched during the live phase
        assert_eq!(layout.split_line(line_id).unwrap().y1, 100.0);
    }

    #[test]
    fn test_commit_resizes_both_sides() {
        let (mut layout, line_id) = row_split();
        let outcome = commit_drag(&mut layout, line_id, 50.0).unwrap();
        assert_eq!(outcome.delta, -50.0);
        assert_eq!(layout.blocks()[0].height, 50.0);
        assert_eq!((layout.blocks()[1].y, layout.blocks()[1].height), (50.0, 150.0));
        assert_eq!(layout.split_line(line_id).unwrap().y2, 50.0);
    }

    #[test]
    fn test_commit_below_minimum_is_rejected() {
        let (mut layout, line_id) = row_split();
        let before = layout.clone();
        let err = commit_drag(&mut layout, line_id, 10.0).unwrap_err();
        assert!(matches!(err, LayoutError::BelowMinimumSize { .. }));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_t_junction_follows_moved_line() {
        let (mut layout, row_line) = row_split();
        let top = layout.blocks()[0].id;
        let column = split_block(&mut layout, top, SplitDirection::Column, true).unwrap();

        commit_drag(&mut layout, row_line, 140.0).unwrap();
        let vertical = layout.split_line(column.line).unwrap();
        assert_eq!((vertical.y1, vertical.y2), (0.0, 140.0));
        assert!(layout.validate_tiling().is_ok());
    }

    #[test]
    fn test_line_through_span_end_is_untouched() {
        // Vertical line at x=150 spanning the full depth, then a row in the
        // left half whose right end meets it.
        let mut layout =
            Layout::new(Dimensions::new(30.0, 20.0, 3.0), GridSpec::default()).unwrap();
        let id = layout.blocks()[0].id;
        let column = split_block(&mut layout, id, SplitDirection::Column, true).unwrap();
        let row = split_block(&mut layout, column.first, SplitDirection::Row, true).unwrap();

        commit_drag(&mut layout, row.line, 60.0).unwrap();
        let vertical = layout.split_line(column.line).unwrap();
        assert_eq!((vertical.y1, vertical.y2), (0.0, 200.0));
        assert!(layout.validate_tiling().is_ok());

        // Dragging the vertical line carries the row's right end with it
        commit_drag(&mut layout, column.line, 200.0).unwrap();
        let row_line = layout.split_line(row.line).unwrap();
        assert_eq!((row_line.x1, row_line.x2, row_line.y1), (0.0, 200.0, 60.0));
        assert!(layout.validate_tiling().is_ok());
    }

    #[test]
    fn test_zero_delta_commit_is_unchanged() {
        let (mut layout, line_id) = row_split();
        let before = layout.clone();
        let outcome = commit_drag(&mut layout, line_id, 101.0).unwrap();
        assert!(!outcome.changed());
        assert_eq!(layout, before);
    }
}
