//! Fixed-order neighbor enumeration over a row-major grid.
//!
//! Order matters: when several frontier regions tie on cost, the one whose
//! seed the search reaches first wins, and reach order follows this
//! enumeration.
//!
//! ```text
//! 4-connected: left, right, down, up
//! 8-connected: left, right, down, up, down-left, down-right, up-left, up-right
//!
//!   [6][3][7]       index + width
//!   [0][ ][1]       index
//!   [4][2][5]       index - width
//! ```

/// In-bounds neighbor indices of one cell. Holds at most eight entries.
#[derive(Clone, Debug)]
pub struct Neighbors {
    cells: [usize; 8],
    len: usize,
    pos: usize,
}

impl Neighbors {
    #[inline]
    fn empty() -> Self {
        Self {
            cells: [0; 8],
            len: 0,
            pos: 0,
        }
    }

    #[inline]
    fn push(&mut self, index: usize) {
        self.cells[self.len] = index;
        self.len += 1;
    }
}

impl Iterator for Neighbors {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.pos < self.len {
            let index = self.cells[self.pos];
            self.pos += 1;
            Some(index)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Neighbors {}

/// Orthogonal neighbors of `index` in a `width` × `height` grid.
///
/// Edge cells yield fewer neighbors; an out-of-range index yields none.
pub fn nhood4(index: usize, width: usize, height: usize) -> Neighbors {
    let mut out = Neighbors::empty();
    if index >= width * height {
        log::debug!("nhood4: index {} outside {}x{} grid", index, width, height);
        return out;
    }

    let x = index % width;
    let y = index / width;

    if x > 0 {
        out.push(index - 1);
    }
    if x + 1 < width {
        out.push(index + 1);
    }
    if y > 0 {
        out.push(index - width);
    }
    if y + 1 < height {
        out.push(index + width);
    }
    out
}

/// All eight surrounding neighbors of `index` in a `width` × `height` grid.
///
/// Orthogonal neighbors come first, in [`nhood4`] order, then diagonals.
pub fn nhood8(index: usize, width: usize, height: usize) -> Neighbors {
    let mut out = nhood4(index, width, height);
    if index >= width * height {
        return out;
    }

    let x = index % width;
    let y = index / width;
    let left = x > 0;
    let right = x + 1 < width;
    let down = y > 0;
    let up = y + 1 < height;

    if down && left {
        out.push(index - width - 1);
    }
    if down && right {
        out.push(index - width + 1);
    }
    if up && left {
        out.push(index + width - 1);
    }
    if up && right {
        out.push(index + width + 1);
    }
    out
}
